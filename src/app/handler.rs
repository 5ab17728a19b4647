use crate::app::command::Command;
use crate::core::parking_lot::ParkingLot;
use crate::domain::model::SlotStatus;
use crate::domain::ports::{PricingPolicy, TicketRepository};
use crate::utils::error::{ParkingError, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Result of one successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { capacity: usize },
    Parked { slot_number: usize },
    Left {
        registration: String,
        slot_number: usize,
        charge: i64,
    },
    Status(Vec<SlotStatus>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created { capacity } => {
                write!(f, "Created parking lot with {} slots", capacity)
            }
            Outcome::Parked { slot_number } => {
                write!(f, "Allocated slot number: {}", slot_number)
            }
            Outcome::Left {
                registration,
                slot_number,
                charge,
            } => write!(
                f,
                "Registration number {} with Slot Number {} is free with Charge {}",
                registration, slot_number, charge
            ),
            Outcome::Status(rows) => {
                write!(f, "Slot No.\tRegistration No.")?;
                for row in rows {
                    write!(f, "\n{}\t{}", row.slot_number, row.registration)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Line-oriented front end over a [`ParkingLot`].
pub struct CommandHandler<R: TicketRepository, P: PricingPolicy> {
    lot: ParkingLot<R, P>,
}

impl<R: TicketRepository, P: PricingPolicy> CommandHandler<R, P> {
    pub fn new(lot: ParkingLot<R, P>) -> Self {
        Self { lot }
    }

    pub fn lot(&self) -> &ParkingLot<R, P> {
        &self.lot
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        tracing::debug!("Executing {}", command.name());
        match command {
            Command::CreateParkingLot { capacity } => {
                let capacity = self.lot.create(capacity)?;
                Ok(Outcome::Created { capacity })
            }
            Command::Park { registration } => {
                let slot_number = self.lot.allocate(&registration)?;
                Ok(Outcome::Parked { slot_number })
            }
            Command::Leave {
                registration,
                hours,
            } => {
                let departure = self.lot.release(&registration, hours)?;
                Ok(Outcome::Left {
                    registration,
                    slot_number: departure.slot_number,
                    charge: departure.charge,
                })
            }
            Command::Status => Ok(Outcome::Status(self.lot.snapshot())),
        }
    }

    /// `None` for blank lines.
    pub fn handle_line(&mut self, line: &str) -> Option<Result<Outcome>> {
        match Command::parse(line) {
            Ok(Some(command)) => Some(self.execute(command)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }

    pub fn process_file<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<RunSummary> {
        let file = File::open(path).map_err(|source| ParkingError::FileOpen {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!("Processing commands from {}", path.display());
        self.process(BufReader::new(file), out)
    }

    /// Runs every line of `reader`, writing one rendered result per command.
    /// Line-local failures are printed and counted; read and write failures
    /// abort the run.
    pub fn process<B: BufRead, W: Write>(&mut self, reader: B, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(ParkingError::FileRead)?;
            summary.lines += 1;

            match self.handle_line(&line) {
                None => continue,
                Some(Ok(outcome)) => {
                    summary.succeeded += 1;
                    writeln!(out, "{}", outcome)?;
                }
                Some(Err(e)) if e.is_line_local() => {
                    summary.failed += 1;
                    tracing::warn!("Line {}: {}", index + 1, e);
                    writeln!(out, "{}", render_error(&e))?;
                }
                Some(Err(e)) => return Err(e),
            }
        }

        tracing::info!(
            "Processed {} lines: {} succeeded, {} failed",
            summary.lines,
            summary.succeeded,
            summary.failed
        );
        Ok(summary)
    }
}

pub fn render_error(error: &ParkingError) -> String {
    match error {
        ParkingError::MalformedCommand { .. } | ParkingError::UnknownCommand { .. } => {
            error.to_string()
        }
        other => format!("Error: {}", other),
    }
}
