//! Compiled-in agent roster

use super::agent::{AgentDirectory, AgentEntry};
use crate::utils::errors::Result;

/// `(combination code, agent name, Telegram handle)` in menu order
pub const ROSTER: &[(&str, &str, &str)] = &[
    ("ШЫҒАРМ", "ОРАЛБАЕВА АРУЖАН", "oralbayeva140"),
    ("ФИЗМАТ", "ФЕРУЗА ДИХАНБАЙ", "ms_feeee"),
    ("ФИЗХИМ", "АСҚАРБЕК АСАНБАЙ", "asanbay_juz40"),
    ("ДЖТАНГЛ", "МАЙРА АҒАБЕКОВА", "dzhteng1"),
    ("БИОХИМ", "ТӘНЕН ЕРДӘУЛЕТ", "Erda_05"),
    ("ГЕОДЖТ", "ҚАЛДЫБАЙ ӘМІРХАН", "geomathdzhtsuper"),
    ("ГЕОМАТ", "ИЗБАСАР АЙГЕРІМ", "izbasaraigerim"),
    ("ДЖТҚҰҚЫҚ", "ДЮСЕГАЛИЕВА ДАЯНА", "dayanka04"),
    ("ӘДЕБТІЛ", "ЖАҚСЫБЕК АЯУЛЫМ", "ayaulym140"),
    ("ГЕОБИО", "МУХАМЕДАЛИ МЕРЕЙ", "mkhmdlm"),
    ("ГЕОАНГЛ", "РАХАТОВ МӘУЛЕН", "maulen_juz40eng"),
    ("РУСЛИТ", "БЕРЕКЕЕВА МАРИЯМ", "berekeevaa"),
    ("ИНФОМАТ", "МҰСАҒАЛИ АМИНА", "aminainfomath"),
];

/// Build the directory from [`ROSTER`]
pub fn builtin_directory() -> Result<AgentDirectory> {
    let entries = ROSTER
        .iter()
        .map(|&(code, name, handle)| Ok((code.to_string(), AgentEntry::new(name, handle)?)))
        .collect::<Result<Vec<_>>>()?;

    AgentDirectory::from_entries(entries)
}
