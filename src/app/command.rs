use crate::utils::error::{ParkingError, Result};

pub const CREATE_PARKING_LOT: &str = "create_parking_lot";
pub const PARK: &str = "park";
pub const LEAVE: &str = "leave";
pub const STATUS: &str = "status";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateParkingLot { capacity: i64 },
    Park { registration: String },
    Leave { registration: String, hours: i64 },
    Status,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`; tokens past the
    /// required arguments are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&kind, args)) = parts.split_first() else {
            return Ok(None);
        };

        let command = match kind {
            CREATE_PARKING_LOT => {
                let [capacity, ..] = require::<1>(kind, args)?;
                Command::CreateParkingLot {
                    capacity: parse_int(kind, capacity)?,
                }
            }
            PARK => {
                let [registration, ..] = require::<1>(kind, args)?;
                Command::Park {
                    registration: registration.to_string(),
                }
            }
            LEAVE => {
                let [registration, hours, ..] = require::<2>(kind, args)?;
                Command::Leave {
                    registration: registration.to_string(),
                    hours: parse_int(kind, hours)?,
                }
            }
            STATUS => Command::Status,
            other => {
                return Err(ParkingError::UnknownCommand {
                    kind: other.to_string(),
                })
            }
        };

        Ok(Some(command))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateParkingLot { .. } => CREATE_PARKING_LOT,
            Command::Park { .. } => PARK,
            Command::Leave { .. } => LEAVE,
            Command::Status => STATUS,
        }
    }
}

fn require<'a, const N: usize>(command: &str, args: &[&'a str]) -> Result<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&str; N]>::try_from(head).ok())
        .ok_or_else(|| ParkingError::MalformedCommand {
            command: command.to_string(),
        })
}

fn parse_int(command: &str, value: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|_| ParkingError::InvalidArgument {
            command: command.to_string(),
            value: value.to_string(),
        })
}
