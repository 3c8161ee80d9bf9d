//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// Type alias for the clan database model.
///
/// # Fields (from `entity::clan::Model`)
/// - `id` - Primary key
/// - `name` - Clan name
/// - `description` - Free text description (nullable)
pub type ClanModel = entity::clan::Model;

/// Type alias for the jutsu database model.
///
/// # Fields (from `entity::jutsu::Model`)
/// - `id` - Primary key
/// - `name` - Jutsu name
/// - `type` - Nature or category, e.g. ninjutsu (nullable)
/// - `rank` - Difficulty rank (nullable)
pub type JutsuModel = entity::jutsu::Model;

/// Type alias for the character database model.
///
/// # Fields (from `entity::character::Model`)
/// - `id` - Primary key
/// - `external_id` - Identifier in an external catalog (nullable)
/// - `name` - Short name
/// - `full_name` - Full name (nullable)
/// - `rank` - Shinobi rank (nullable)
/// - `clan_id` - Foreign key to the character's clan (nullable, cleared when the clan is deleted)
/// - `biography` - Free text biography (nullable)
/// - `image_url` - Portrait URL (nullable)
/// - `created_at` - Timestamp when the record was created
pub type CharacterModel = entity::character::Model;

/// Type alias for the character/jutsu link database model.
///
/// # Fields (from `entity::character_jutsu_link::Model`)
/// - `character_id` - Foreign key to the character, part of the primary key
/// - `jutsu_id` - Foreign key to the jutsu, part of the primary key
/// - `learned_in_episode` - Episode the jutsu was learned in (nullable)
pub type CharacterJutsuLinkModel = entity::character_jutsu_link::Model;
