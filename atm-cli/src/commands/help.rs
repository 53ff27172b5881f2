//! Help command - list available commands

use super::{deposit, login, logout, transfer, withdraw};

const COMMANDS: [(&str, &str); 7] = [
    (login::USAGE, "authenticates customer with the given login name, creating it if it does not exist"),
    (logout::USAGE, "logs out the current customer"),
    (deposit::USAGE, "deposits the given amount to the current customer's account"),
    (withdraw::USAGE, "withdraws the given amount from the current customer's account"),
    (transfer::USAGE, "transfers the given amount from the current customer to the given customer"),
    ("exit", "stops the program"),
    ("help", "prints help"),
];

pub fn run() -> String {
    COMMANDS
        .iter()
        .map(|(usage, description)| format!("{} - {}\n", usage, description))
        .collect()
}
