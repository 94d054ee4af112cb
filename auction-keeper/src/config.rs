use {
    crate::auction::entities,
    anyhow::{
        anyhow,
        Result,
    },
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    std::{
        fs,
        time::Duration,
    },
    time::OffsetDateTime,
};

#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the auction expiration keeper.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    #[command(flatten)]
    pub config: ConfigOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Config Options")]
#[group(id = "Config")]
pub struct ConfigOptions {
    /// Path to a configuration file with the sweeper settings and seed auctions
    #[arg(long = "config")]
    #[arg(env = "AUCTION_KEEPER_CONFIG")]
    #[arg(default_value = "config.yaml")]
    pub config: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sweeper:  ConfigSweeper,
    /// Auctions written to the store at startup. Existing ids are overwritten.
    #[serde(default)]
    pub auctions: Vec<AuctionSeed>,
}

impl Config {
    pub fn load(path: &str) -> Result<Config> {
        let yaml_content = fs::read_to_string(path)?;
        Self::from_yaml(&yaml_content)
    }

    pub fn from_yaml(yaml_content: &str) -> Result<Config> {
        let config: Config = serde_yaml::from_str(yaml_content)?;
        if config.sweeper.sweep_interval.is_zero() {
            return Err(anyhow!("sweeper.sweep_interval must be greater than zero"));
        }
        Ok(config)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfigSweeper {
    /// How long an auction stays active after creation.
    #[serde(with = "humantime_serde", default = "ConfigSweeper::default_expiration_window")]
    pub expiration_window: Duration,
    /// Time between two expiration sweeps.
    #[serde(with = "humantime_serde", default = "ConfigSweeper::default_sweep_interval")]
    pub sweep_interval:    Duration,
}

impl ConfigSweeper {
    pub fn default_expiration_window() -> Duration {
        Duration::from_secs(5 * 60)
    }

    pub fn default_sweep_interval() -> Duration {
        Duration::from_secs(10)
    }
}

impl Default for ConfigSweeper {
    fn default() -> Self {
        Self {
            expiration_window: Self::default_expiration_window(),
            sweep_interval:    Self::default_sweep_interval(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuctionSeed {
    pub id:            entities::AuctionId,
    pub product_name:  String,
    pub category:      String,
    pub description:   String,
    pub condition:     entities::AuctionCondition,
    #[serde(default = "AuctionSeed::default_status")]
    pub status:        entities::AuctionStatus,
    /// RFC 3339 timestamp. Defaults to the time the seed is applied.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub creation_time: Option<OffsetDateTime>,
}

impl AuctionSeed {
    fn default_status() -> entities::AuctionStatus {
        entities::AuctionStatus::Active
    }

    pub fn into_auction(self, now: OffsetDateTime) -> entities::Auction {
        entities::Auction {
            id:            self.id,
            product_name:  self.product_name,
            category:      self.category,
            description:   self.description,
            condition:     self.condition,
            status:        self.status,
            creation_time: self.creation_time.unwrap_or(now),
        }
    }
}
