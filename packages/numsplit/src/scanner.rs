use std::ops::Range;

use crate::classify::{is_digit, skip_noise};
use crate::parse::parse_unsigned;
use crate::{Error, Item};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mode {
    OutsideNumber,
    InsideNumber,
}

/// A maximal run of digits found in the text.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Run<'t> {
    start: usize,
    digits: &'t [u8],
}

impl Run<'_> {
    pub(crate) const fn value(&self) -> Item {
        parse_unsigned(self.digits)
    }

    /// Byte range of the run within the scanned text.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "the run lies within the text, so its end is a valid offset"
    )]
    pub(crate) const fn range(&self) -> Range<usize> {
        self.start..self.start + self.digits.len()
    }
}

/// Single-pass state machine that finds the digit runs of a text, left to right.
///
/// Any leading non-digit bytes are skipped on construction. After that, a digit outside of a
/// number opens a run, a non-digit inside a number closes it and every other non-digit is
/// skipped. A run still open at the end of the text is closed there.
#[derive(Debug)]
pub(crate) struct Scanner<'t> {
    text_len: usize,

    // Unscanned part of the text.
    remaining: &'t [u8],

    mode: Mode,

    // The text from the first digit of the open run onwards.
    run_start: Option<&'t [u8]>,
}

impl<'t> Scanner<'t> {
    pub(crate) const fn new(text: &'t str) -> Self {
        let bytes = text.as_bytes();

        Self {
            text_len: bytes.len(),
            remaining: skip_noise(bytes),
            mode: Mode::OutsideNumber,
            run_start: None,
        }
    }

    /// The part of the text that has not been scanned yet.
    pub(crate) const fn remaining(&self) -> &'t [u8] {
        self.remaining
    }

    /// Byte offset of the next unscanned byte.
    const fn position(&self) -> usize {
        self.text_len.saturating_sub(self.remaining.len())
    }

    /// Scans up to the end of the next digit run and returns it.
    ///
    /// Returns `Ok(None)` once the whole text has been scanned.
    pub(crate) const fn next_run(&mut self) -> crate::Result<Option<Run<'t>>> {
        loop {
            let remaining = self.remaining;
            let [byte, rest @ ..] = remaining else {
                break;
            };

            match (self.mode, is_digit(*byte)) {
                (Mode::OutsideNumber, true) => {
                    self.run_start = Some(self.remaining);
                    self.mode = Mode::InsideNumber;
                    self.remaining = rest;
                }
                (Mode::InsideNumber, true) | (Mode::OutsideNumber, false) => {
                    self.remaining = rest;
                }
                (Mode::InsideNumber, false) => {
                    let run = self.close_run();
                    self.remaining = skip_noise(rest);

                    return match run {
                        Ok(run) => Ok(Some(run)),
                        Err(error) => Err(error),
                    };
                }
            }
        }

        match self.mode {
            Mode::InsideNumber => match self.close_run() {
                Ok(run) => Ok(Some(run)),
                Err(error) => Err(error),
            },
            Mode::OutsideNumber => Ok(None),
        }
    }

    // Closes the open run, which ends right before `self.remaining`.
    const fn close_run(&mut self) -> crate::Result<Run<'t>> {
        let run_start = self.run_start;
        self.run_start = None;
        self.mode = Mode::OutsideNumber;

        let Some(run_start) = run_start else {
            return Err(Error::MissingRunStart {
                position: self.position(),
            });
        };

        let run_len = run_start.len().saturating_sub(self.remaining.len());
        let (digits, _) = run_start.split_at(run_len);

        Ok(Run {
            start: self.text_len.saturating_sub(run_start.len()),
            digits,
        })
    }
}
