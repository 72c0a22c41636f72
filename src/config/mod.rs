use crate::core::assign::TeamRoster;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// User configuration: the working collection path, the four team slots
/// used by bulk assignment, and table rendering preferences.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default)]
    pub day_even_team: String,
    #[serde(default)]
    pub day_odd_team: String,
    #[serde(default)]
    pub night_even_team: String,
    #[serde(default)]
    pub night_odd_team: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}

fn default_collection() -> String {
    Config::collection_file().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collection: Self::collection_file().to_string_lossy().to_string(),
            day_even_team: String::new(),
            day_odd_team: String::new(),
            night_even_team: String::new(),
            night_odd_team: String::new(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rvisitlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rvisitlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rvisitlog.conf")
    }

    /// Return the default path of the working collection
    pub fn collection_file() -> PathBuf {
        Self::config_dir().join("visits.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    pub fn save(&self) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| io::Error::other(format!("config serialization error: {e}")))?;

        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())
    }

    /// Initialize configuration and an empty collection file
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        let collection = Self::collection_file();
        if !collection.exists() {
            fs::write(&collection, "[]")?;
        }

        println!("✅ Collection:  {:?}", collection);

        Ok(())
    }

    /// Report configuration keys missing from an existing config file.
    pub fn check_missing(content: &str) -> Vec<&'static str> {
        let expected = [
            "collection",
            "day_even_team",
            "day_odd_team",
            "night_even_team",
            "night_odd_team",
            "separator_char",
        ];

        let value: serde_yaml::Value = match serde_yaml::from_str(content) {
            Ok(v) => v,
            Err(_) => return expected.to_vec(),
        };

        expected
            .into_iter()
            .filter(|key| value.get(*key).is_none())
            .collect()
    }

    /// The four assignment slots as seen by the team assignment engine.
    pub fn roster(&self) -> TeamRoster {
        TeamRoster::new(
            self.day_even_team.clone(),
            self.day_odd_team.clone(),
            self.night_even_team.clone(),
            self.night_odd_team.clone(),
        )
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }
}
