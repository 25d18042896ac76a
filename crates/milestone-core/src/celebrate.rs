//! Goal-reached banner plus a spoken announcement or terminal bells.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::time::Duration;

pub const MESSAGE: &str = "500 million Symfony downloads reached!";

const BEER: &str = "\u{1F37A}  ";
const BEERS: &str = "\u{1F37B}  ";
const PARTY_POPPER: &str = "\u{1F389}  ";
const CLAP: &str = "\u{1F44F}  ";
const CONFETTI: &str = "\u{1F38A}  ";

/// Emoji run printed above and below the message.
pub fn emoji_line() -> String {
    [BEER, PARTY_POPPER, BEERS, CLAP, CONFETTI].concat().repeat(3)
}

pub fn banner() -> String {
    let line = emoji_line();
    format!("\n\n{line}\n\n   {MESSAGE} \n\n{line}\n\n")
}

/// How the celebration sounds.
#[derive(Debug, Clone)]
pub struct Celebration {
    /// Try the `say` command first.
    pub announce: bool,
    /// Bells rung when there is no voice.
    pub bells: u32,
    /// Gap between two bells.
    pub bell_gap: Duration,
}

impl Default for Celebration {
    fn default() -> Self {
        Self {
            announce: true,
            bells: 5,
            bell_gap: Duration::from_millis(500),
        }
    }
}

impl Celebration {
    pub fn new(announce: bool) -> Self {
        Self {
            announce,
            ..Self::default()
        }
    }

    /// Print the banner, then speak or ring. Returns whether the voice ran.
    pub fn perform<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        out.write_all(banner().as_bytes())?;
        out.flush()?;

        if self.announce && speak(MESSAGE) {
            return Ok(true);
        }
        self.ring(out)?;
        Ok(false)
    }

    fn ring<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for _ in 0..self.bells {
            out.write_all(b"\x07")?;
            out.flush()?;
            if !self.bell_gap.is_zero() {
                std::thread::sleep(self.bell_gap);
            }
        }
        Ok(())
    }
}

/// Run `say -v "Good News" <message>`; false if it is missing or fails.
fn speak(message: &str) -> bool {
    let status = Command::new("say")
        .args(["-v", "Good News", message])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    match status {
        Ok(s) if s.success() => true,
        Ok(s) => {
            tracing::debug!("say exited with {}", s);
            false
        }
        Err(e) => {
            tracing::debug!("say unavailable: {}", e);
            false
        }
    }
}
