// Pamphlet-shaped inputs with known corpus output
// WHY: Golden-file testing requires deterministic input/output pairs for validation

/// Front-matter lines at the top of PAMPHLET_TEXT
pub const PAMPHLET_FRONT_MATTER_LINES: usize = 5;

pub const PAMPHLET_NOTICE: &str = "Visit the J. C. O\u{2019}Hair Online Library at https://bereanbiblesociety.org/j-c-ohair-online-library/";

/// Miniature pamphlet: title page and contents, then lessons with page-break noise.
/// Contents entries repeat heading text and must be skipped by the discard offset.
pub const PAMPHLET_TEXT: &str = "ONE HUNDRED AND SEVENTY
BIBLE LESSONS
Lesson One
Lesson Two
Lesson One Hundred and Seventy
\u{000C}
Lesson One
   In the beginning God created the heaven and the earth.
Genesis 1:1
Visit the J. C. O\u{2019}Hair Online Library at https://bereanbiblesociety.org/j-c-ohair-online-library/
\u{000C}
LESSON TWO
Grace and truth came by Jesus Christ.

Lesson Twenty-One
Note the dash form.
Lesson Twenty One
Note the space form.
Lesson One Hundred Five
Without and.
Lesson One Hundred and Seventy
The last lesson.
";

/// Expected corpus for PAMPHLET_TEXT with PAMPHLET_FRONT_MATTER_LINES discarded
pub const PAMPHLET_EXPECTED: &str = "in the beginning god created the heaven and the earth. genesis 1:1
grace and truth came by jesus christ.
note the dash form.
note the space form.
without and.
the last lesson.";

pub const PAMPHLET_EXPECTED_LESSONS: usize = 6;
