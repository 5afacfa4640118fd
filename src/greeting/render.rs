//! Greeting renderer
//!
//! Turns a resolved set of inputs into the five greeting lines. Pure: no I/O,
//! no hidden state, and no failure mode. Styling is carried as a tag on each
//! line and applied later by a [`LineSink`](crate::cli::LineSink).

use super::inputs::GreetingInputs;

/// Number of lines every greeting has, whatever the inputs
pub const LINE_COUNT: usize = 5;

/// Display color for a greeting line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    /// Terminal default, no styling
    Default,
    /// Name line
    Green,
    /// Experience line
    Blue,
    /// Automation target line
    Yellow,
    /// Secret line
    Cyan,
}

/// A single line of greeting output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingLine {
    /// Plain text, without trailing newline or styling
    pub text: String,
    /// How the line should be styled when shown on a terminal
    pub color: ColorTag,
}

impl GreetingLine {
    fn new(text: impl Into<String>, color: ColorTag) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Render the greeting for the given inputs.
///
/// Always returns exactly [`LINE_COUNT`] lines in a fixed order. Inputs are
/// substituted verbatim, so empty values produce e.g. `My secret is .`
#[must_use]
pub fn render(inputs: &GreetingInputs) -> [GreetingLine; LINE_COUNT] {
    let experience = if inputs.flag {
        "I've already created formulas using Ritchie."
    } else {
        "I'm excited in creating new formulas using Ritchie."
    };

    [
        GreetingLine::new("Hello World!", ColorTag::Default),
        GreetingLine::new(format!("My name is {}.", inputs.text), ColorTag::Green),
        GreetingLine::new(experience, ColorTag::Blue),
        GreetingLine::new(
            format!("Today, I want to automate {}.", inputs.list),
            ColorTag::Yellow,
        ),
        GreetingLine::new(format!("My secret is {}.", inputs.secret), ColorTag::Cyan),
    ]
}

/// Join rendered lines into their unstyled, newline-terminated form
#[must_use]
pub fn plain_text(lines: &[GreetingLine]) -> String {
    lines.iter().fold(String::new(), |mut out, line| {
        out.push_str(&line.text);
        out.push('\n');
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_test_inputs;

    #[test]
    fn test_render_true_flag() {
        let lines = render(&make_test_inputs(true, "pass"));
        assert_eq!(lines[0].text, "Hello World!");
        assert_eq!(lines[1].text, "My name is Hello.");
        assert_eq!(lines[2].text, "I've already created formulas using Ritchie.");
        assert_eq!(lines[3].text, "Today, I want to automate world.");
        assert_eq!(lines[4].text, "My secret is pass.");
    }

    #[test]
    fn test_render_false_flag() {
        let lines = render(&make_test_inputs(false, "pass"));
        assert_eq!(
            lines[2].text,
            "I'm excited in creating new formulas using Ritchie."
        );
    }

    #[test]
    fn test_render_empty_secret() {
        let lines = render(&make_test_inputs(false, ""));
        assert_eq!(lines[4].text, "My secret is .");
    }

    #[test]
    fn test_render_all_empty_inputs() {
        let lines = render(&GreetingInputs::default());
        assert_eq!(lines.len(), LINE_COUNT);
        assert_eq!(lines[1].text, "My name is .");
        assert_eq!(
            lines[2].text,
            "I'm excited in creating new formulas using Ritchie."
        );
        assert_eq!(lines[3].text, "Today, I want to automate .");
        assert_eq!(lines[4].text, "My secret is .");
    }

    #[test]
    fn test_render_substitutes_verbatim() {
        // No escaping or trimming of user-provided values
        let inputs = GreetingInputs {
            text: "  {braces} %s \u{e9}".to_string(),
            flag: false,
            list: "a, b, c".to_string(),
            secret: "p@ss\tword".to_string(),
        };
        let lines = render(&inputs);
        assert_eq!(lines[1].text, "My name is   {braces} %s \u{e9}.");
        assert_eq!(lines[3].text, "Today, I want to automate a, b, c.");
        assert_eq!(lines[4].text, "My secret is p@ss\tword.");
    }

    #[test]
    fn test_render_is_idempotent() {
        let inputs = make_test_inputs(true, "pass");
        assert_eq!(render(&inputs), render(&inputs));
    }

    #[test]
    fn test_line_colors_fixed_regardless_of_flag() {
        let expected = [
            ColorTag::Default,
            ColorTag::Green,
            ColorTag::Blue,
            ColorTag::Yellow,
            ColorTag::Cyan,
        ];
        for flag in [true, false] {
            let colors: Vec<ColorTag> = render(&make_test_inputs(flag, "x"))
                .iter()
                .map(|l| l.color)
                .collect();
            assert_eq!(colors, expected);
        }
    }

    #[test]
    fn test_plain_text_concatenates_lines() {
        let lines = render(&make_test_inputs(true, "pass"));
        assert_eq!(
            plain_text(&lines),
            "Hello World!\n\
             My name is Hello.\n\
             I've already created formulas using Ritchie.\n\
             Today, I want to automate world.\n\
             My secret is pass.\n"
        );
    }

    #[test]
    fn test_plain_text_empty_slice() {
        assert_eq!(plain_text(&[]), "");
    }
}
