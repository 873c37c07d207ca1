use std::io::{self, BufRead, Write};

use chrono::Local;
use tracing::debug;

use crate::core::types::{NetworkResult, Target};
use crate::modules::fuzzing;
use crate::modules::payloads::{GARBAGE, INVALID_UTF8, NORMAL_MESSAGE};
use crate::sockparse::{count_input, read_line};

pub const BANNER: &str = "===============================================\n   \
TcpFuzzClient\n\
===============================================\n";

pub const MENU: &str = "\n--- Select Test ---\n\
1. Send normal message\n\
2. Send invalid UTF-8\n\
3. Send partial message\n\
4. Send large message\n\
5. Rapid open/close\n\
6. Fuzz with garbage data\n\
7. Send fake TLS handshake\n\
0. Exit\n";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One entry of the test menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NormalMessage,
    InvalidUtf8,
    PartialMessage,
    LargeMessage,
    RapidOpenClose,
    Garbage,
    FakeTlsHandshake,
    Exit,
}

impl MenuChoice {
    /// Exact match on "0".."7"; anything else (including " 1") is not a choice
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::NormalMessage),
            "2" => Some(MenuChoice::InvalidUtf8),
            "3" => Some(MenuChoice::PartialMessage),
            "4" => Some(MenuChoice::LargeMessage),
            "5" => Some(MenuChoice::RapidOpenClose),
            "6" => Some(MenuChoice::Garbage),
            "7" => Some(MenuChoice::FakeTlsHandshake),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "Session started: {}", Local::now().format(TIMESTAMP_FORMAT))
}

/// Interactive menu loop bound to one target
pub struct Console<R, W> {
    target: Target,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(target: Target, input: R, out: W) -> Self {
        Self { target, input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until "0" or end of input.
    /// Only a bad repetition count (or a broken stdin/stdout) ends it with an error.
    pub async fn run(&mut self) -> NetworkResult<()> {
        loop {
            write!(self.out, "{}", MENU)?;
            self.out.flush()?;

            let line = match read_line(&mut self.input)? {
                Some(line) => line,
                None => {
                    debug!("input closed, leaving menu");
                    break;
                }
            };

            match MenuChoice::from_input(&line) {
                Some(choice) => {
                    if !self.dispatch(choice).await? {
                        break;
                    }
                }
                None => debug!(input = %line, "ignoring unknown selection"),
            }
        }

        writeln!(self.out, "Session ended: {}", Local::now().format(TIMESTAMP_FORMAT))?;
        Ok(())
    }

    /// Runs one action and returns whether the menu should keep going (`false` only for Exit).
    /// Network failures were already printed by the action and are dropped here.
    pub async fn dispatch(&mut self, choice: MenuChoice) -> NetworkResult<bool> {
        debug!(?choice, target = %self.target, "running action");
        let target = &self.target;
        let out = &mut self.out;

        match choice {
            MenuChoice::NormalMessage => {
                let _ = fuzzing::send_message(target, NORMAL_MESSAGE, out).await;
            }
            MenuChoice::InvalidUtf8 => {
                let _ = fuzzing::send_raw_bytes(target, &INVALID_UTF8, out).await;
            }
            MenuChoice::PartialMessage => {
                let _ = fuzzing::send_partial_message(target, out).await;
            }
            MenuChoice::LargeMessage => {
                let _ = fuzzing::send_large_message(target, out).await;
            }
            MenuChoice::RapidOpenClose => {
                let count = count_input(&mut self.input, out)?;
                let _ = fuzzing::rapid_open_close(target, count, out).await;
            }
            MenuChoice::Garbage => {
                let _ = fuzzing::send_raw_bytes(target, GARBAGE.as_bytes(), out).await;
            }
            MenuChoice::FakeTlsHandshake => {
                let _ = fuzzing::send_fake_tls_handshake(target, out).await;
            }
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }
}
