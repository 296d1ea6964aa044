/// Environment variable naming the status command program
pub const QSTAT_ENV: &str = "PBS_STATUS_QSTAT";

const DEFAULT_QSTAT: &str = "qstat";

/// Runtime configuration, read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Program run as `<program> -fx <job id>`
    pub qstat_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            qstat_program: DEFAULT_QSTAT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let qstat_program = lookup(QSTAT_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_QSTAT.to_string());

        Self { qstat_program }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_qstat() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
        assert_eq!(Config::default().qstat_program, "qstat");
    }

    #[test]
    fn test_override_program() {
        let config = Config::from_lookup(|key| {
            (key == QSTAT_ENV).then(|| "/opt/pbs/bin/qstat".to_string())
        });
        assert_eq!(config.qstat_program, "/opt/pbs/bin/qstat");
    }

    #[test]
    fn test_blank_override_falls_back() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.qstat_program, "qstat");
    }
}
