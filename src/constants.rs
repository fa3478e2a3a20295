pub const DATA_FILE: &str = "badminton_data.json";
pub const DATA_FILE_ENV: &str = "BADMINTON_DATA";
pub const RANKINGS_FILE: &str = "rankings.csv";

pub const ELO_BASE: f64 = 1500.0;
pub const ELO_STEP: f64 = 400.0;
pub const K_FACTOR: f64 = 32.0;

pub const PLAYERS_PER_MATCH: usize = 4;
