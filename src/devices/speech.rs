//! Reading sentences aloud

use std::process::{Child, Command, ExitStatus, Stdio};
use tracing::{debug, warn};

pub trait SpeechOutput {
    /// Start saying `text`, cutting off whatever was being said.
    fn speak(&mut self, text: &str);
}

/// Drops every request
#[derive(Debug, Default)]
pub struct SilentSpeech;

impl SpeechOutput for SilentSpeech {
    fn speak(&mut self, text: &str) {
        debug!(text, "speech disabled");
    }
}

/// Speaks through an external program such as `espeak` or `say`, passing the
/// sentence as its only argument.
#[derive(Debug)]
pub struct CommandSpeech {
    program: String,
    current: Option<Child>,
    /// Set after the program failed to start, so we warn once
    broken: bool,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>) -> Self {
        CommandSpeech {
            program: program.into(),
            current: None,
            broken: false,
        }
    }

    /// Stop and reap the utterance in flight, if any.
    fn cancel(&mut self) -> Option<ExitStatus> {
        let mut child = self.current.take()?;
        // Already finished is fine
        let _ = child.kill();
        child.wait().ok()
    }
}

impl SpeechOutput for CommandSpeech {
    fn speak(&mut self, text: &str) {
        self.cancel();
        if self.broken {
            return;
        }

        match Command::new(&self.program)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                debug!(program = %self.program, text, "speaking");
                self.current = Some(child);
            }
            Err(err) => {
                warn!(program = %self.program, error = %err, "speech program unavailable; staying silent");
                self.broken = true;
            }
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_new_utterance_replaces_the_old_one() {
        let mut speech = CommandSpeech::new("sleep");
        speech.speak("5");
        let first = speech.current.as_ref().map(Child::id).unwrap();

        speech.speak("5");
        let second = speech.current.as_ref().map(Child::id).unwrap();
        assert_ne!(first, second);
        // First child is gone and reaped
        #[cfg(target_os = "linux")]
        assert!(!std::path::Path::new(&format!("/proc/{}", first)).exists());

        // The running one is killed, not waited out
        let status = speech.cancel().unwrap();
        assert!(!status.success());
        assert!(speech.current.is_none());
        assert!(speech.cancel().is_none());
    }

    #[test]
    fn test_missing_program_goes_quiet() {
        let mut speech = CommandSpeech::new("abacus-tty-no-such-speech-program");
        speech.speak("hello");
        assert!(speech.broken);
        assert!(speech.current.is_none());

        speech.speak("hello again");
        assert!(speech.broken);
        assert!(speech.current.is_none());
    }
}
