//! Chat command implementation.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::core::ResponderService;
use crate::error::SangayError;
use crate::features::responder::{Conversation, KeywordResponder, Message};
use crate::output::format_messages;

/// Execute the chat command.
///
/// With a message, returns the exchange. Without one, runs an interactive
/// conversation on stdin/stdout and returns the transcript for JSON output.
///
/// # Errors
///
/// Returns an error if terminal I/O or formatting fails.
pub fn chat(message: Option<String>, format: OutputFormat) -> Result<String, SangayError> {
    let responder = KeywordResponder::chat();

    if let Some(message) = message {
        let mut conversation = Conversation::new();
        if conversation.send(&message, &responder).is_none() {
            return Err(SangayError::Validation(
                "Type a message to chat".to_string(),
            ));
        }
        // The greeting is only shown in interactive mode.
        return format_messages(&conversation.messages()[1..], format);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let conversation = converse(stdin.lock(), stdout.lock(), &responder, format)?;

    match format {
        OutputFormat::Json => format_messages(conversation.messages(), format),
        OutputFormat::Pretty => Ok(String::new()),
    }
}

/// Run a line-based conversation until EOF, `exit` or `quit`.
///
/// In pretty mode, replies are written to `output` as they arrive.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn converse<R, W, S>(
    input: R,
    mut output: W,
    responder: &S,
    format: OutputFormat,
) -> Result<Conversation, SangayError>
where
    R: BufRead,
    W: Write,
    S: ResponderService + ?Sized,
{
    let mut conversation = Conversation::new();
    let pretty = format == OutputFormat::Pretty;

    if pretty {
        if let Some(greeting) = conversation.messages().first() {
            write_reply(&mut output, greeting)?;
        }
        writeln!(output, "{}", "(type 'exit' to leave)".dimmed())?;
    }

    for line in input.lines() {
        let line = line?;
        let text = line.trim();
        if text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit") {
            break;
        }
        if let Some(reply) = conversation.send(text, responder) {
            if pretty {
                write_reply(&mut output, reply)?;
            }
        }
    }

    if pretty {
        writeln!(output, "{}", "Take care.".magenta())?;
    }
    output.flush()?;
    Ok(conversation)
}

fn write_reply<W: Write>(output: &mut W, message: &Message) -> io::Result<()> {
    writeln!(output, "{} {}", "sangay ›".magenta().bold(), message.text)
}
