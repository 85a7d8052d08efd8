use clap::Parser;

/// Play Magnetic Cave in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Play mode: 1 manual vs manual, 2 manual vs computer, 3 computer vs manual, 4 exit.
    /// Prompted for when not given
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub mode: Option<u8>,

    /// How many moves ahead the computer searches. Prompted for when not given
    #[arg(short, long)]
    pub depth: Option<usize>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Mode {
    ManualVsManual,
    ManualVsComputer,
    ComputerVsManual,
    Exit,
}

impl Mode {
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Mode::ManualVsManual),
            2 => Some(Mode::ManualVsComputer),
            3 => Some(Mode::ComputerVsManual),
            4 => Some(Mode::Exit),
            _ => None,
        }
    }

    pub fn uses_computer(self) -> bool {
        matches!(self, Mode::ManualVsComputer | Mode::ComputerVsManual)
    }
}
