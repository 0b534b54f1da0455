//! User-facing wording
//!
//! Kazakh texts shown by the bot.

/// Reply to `/start`
pub const WELCOME: &str = "Call Centre-ге қош келдіңіз 👋\n\nКомбинацияны таңдаңыз ⬇️";

/// Reply to any message that is not a command
pub const CHOOSE_FROM_MENU: &str = "Мәзірден таңдаңыз ⬇️";

/// Alert shown when a pressed code is not in the directory
pub const COMBO_NOT_FOUND: &str = "Комбинация табылмады";

/// Contact card for the agent responsible for `combo`
pub fn agent_card(display_name: &str, combo: &str) -> String {
    format!(
        "{} – {} комбинациясына жауапты маман.\nБайланысу үшін мында басыңыз 👉",
        display_name, combo
    )
}
