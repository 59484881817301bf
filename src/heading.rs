// WHY: lesson headings are a closed set of spelled-out numbers, so one compiled DFA
// decides every line in O(n) without a numeral parser

use anyhow::Result;
use regex_automata::{dfa::{dense::DFA, Automaton}, Anchored, Input};
use tracing::{debug, info};

const ONES: &str = "(one|two|three|four|five|six|seven|eight|nine)";
const TEENS: &str = "(ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen)";
const TENS: &str = "(twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety)";

/// Assemble the full-line heading pattern: `lesson <1..=999 in words>`, case-insensitive
///
/// Compounds take a space or a dash ("twenty one", "twenty-one"); hundreds take an
/// optional "and" before the remainder ("one hundred five", "one hundred and five").
pub fn heading_pattern() -> String {
    let two_digit = format!("(?:{TEENS}|{TENS}(?:[ -]{ONES})?)");
    let one_to_99 = format!("(?:{ONES}|{two_digit})");
    let hundreds = format!("{ONES} hundred(?: (?:and )?{one_to_99})?");
    let full_number = format!("(?:{one_to_99}|{hundreds})");
    format!("(?i)^lesson {full_number}$")
}

/// Whole-line classifier for lesson headings
pub struct HeadingClassifier {
    /// Compiled DFA for the heading grammar
    dfa: DFA<Vec<u32>>,
}

impl HeadingClassifier {
    pub fn new() -> Result<Self> {
        info!("Compiling DFA for lesson heading detection");

        let pattern = heading_pattern();
        let dfa = DFA::new(&pattern)?;

        debug!("Successfully compiled heading DFA ({} bytes of pattern)", pattern.len());

        Ok(Self { dfa })
    }

    /// True when the entire line is a lesson heading
    pub fn is_heading(&self, line: &str) -> bool {
        // WHY: the pattern is anchored at both ends, so any match covers the whole line
        let input = Input::new(line).anchored(Anchored::Yes);
        matches!(self.dfa.try_search_fwd(&input), Ok(Some(_)))
    }
}
