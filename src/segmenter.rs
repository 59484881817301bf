// WHY: headings are delimiters only, a lesson is whatever text follows one heading
// up to the next heading or the end of input

use tracing::{debug, info};

use crate::heading::HeadingClassifier;

/// One segmented lesson, identified by its position in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub index: usize,
    /// Space-prefixed lines as accumulated; see [`Lesson::text`]
    body: String,
}

impl Lesson {
    fn new(index: usize) -> Self {
        Self { index, body: String::new() }
    }

    fn push_line(&mut self, line: &str) {
        self.body.push(' ');
        self.body.push_str(line);
    }

    /// Lesson text with the accumulated leading space trimmed
    pub fn text(&self) -> &str {
        self.body.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

/// Result of one segmentation pass
#[derive(Debug, Clone, Default)]
pub struct Segmentation {
    pub lessons: Vec<Lesson>,
    /// Non-empty lines dropped because no heading had been seen yet
    pub preamble_lines: usize,
}

/// Splits cleaned lines into lessons at each recognized heading
pub struct LessonSegmenter {
    classifier: HeadingClassifier,
}

impl LessonSegmenter {
    pub fn new(classifier: HeadingClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &HeadingClassifier {
        &self.classifier
    }

    /// Single forward pass over already-cleaned lines
    pub fn segment<'a, I>(&self, lines: I) -> Segmentation
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut result = Segmentation::default();

        for line in lines {
            if line.is_empty() {
                continue;
            }

            if self.classifier.is_heading(line) {
                debug!(heading = line, index = result.lessons.len(), "Lesson heading");
                result.lessons.push(Lesson::new(result.lessons.len()));
                continue;
            }

            match result.lessons.last_mut() {
                Some(lesson) => lesson.push_line(line),
                None => result.preamble_lines += 1,
            }
        }

        info!(
            "Segmented {} lessons ({} preamble lines dropped)",
            result.lessons.len(),
            result.preamble_lines
        );
        result
    }
}
