use clap::ValueEnum;

#[derive(ValueEnum, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ServiceAction {
    Install,
    Start,
    Stop,
    Remove,
    Restart,
}
