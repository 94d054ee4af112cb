use {
    serde::{
        Deserialize,
        Serialize,
    },
    std::time::Duration,
    strum::{
        Display,
        EnumString,
    },
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type AuctionId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuctionCondition {
    New,
    Used,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Completed,
}

impl AuctionStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AuctionStatus::Active)
    }

    /// Completed is terminal. Re-applying the current status is always allowed.
    pub fn can_transition_to(&self, next: AuctionStatus) -> bool {
        match (self, next) {
            (AuctionStatus::Active, _) => true,
            (AuctionStatus::Completed, AuctionStatus::Completed) => true,
            (AuctionStatus::Completed, AuctionStatus::Active) => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Auction {
    pub id:            AuctionId,
    pub product_name:  String,
    pub category:      String,
    pub description:   String,
    pub condition:     AuctionCondition,
    pub status:        AuctionStatus,
    pub creation_time: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct AuctionCreate {
    pub id:           Option<AuctionId>,
    pub product_name: String,
    pub category:     String,
    pub description:  String,
    pub condition:    AuctionCondition,
}

const MIN_PRODUCT_NAME_LEN: usize = 2;
const MIN_CATEGORY_LEN: usize = 3;
const MIN_DESCRIPTION_LEN: usize = 11;
const MAX_DESCRIPTION_LEN: usize = 200;

impl AuctionCreate {
    pub fn validate(&self) -> Result<(), String> {
        if self.product_name.chars().count() < MIN_PRODUCT_NAME_LEN {
            return Err(format!(
                "product name must be at least {} characters",
                MIN_PRODUCT_NAME_LEN
            ));
        }
        if self.category.chars().count() < MIN_CATEGORY_LEN {
            return Err(format!(
                "category must be at least {} characters",
                MIN_CATEGORY_LEN
            ));
        }
        let description_len = self.description.chars().count();
        if !(MIN_DESCRIPTION_LEN..=MAX_DESCRIPTION_LEN).contains(&description_len) {
            return Err(format!(
                "description must be between {} and {} characters",
                MIN_DESCRIPTION_LEN, MAX_DESCRIPTION_LEN
            ));
        }
        if let Some(id) = &self.id {
            if id.trim().is_empty() {
                return Err("auction id must not be empty".to_string());
            }
        }
        Ok(())
    }
}

impl Auction {
    pub fn new(auction: AuctionCreate, creation_time: OffsetDateTime) -> Self {
        Self {
            id: auction.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            product_name: auction.product_name,
            category: auction.category,
            description: auction.description,
            condition: auction.condition,
            status: AuctionStatus::Active,
            creation_time,
        }
    }

    /// Inclusive at the boundary: an auction whose age equals the window is expired.
    /// A creation time in the future yields a negative age and never expires.
    pub fn is_expired(&self, now: OffsetDateTime, expiration_window: Duration) -> bool {
        now - self.creation_time >= expiration_window
    }
}
