pub mod damage;
pub mod item;
pub mod player;

pub use damage::{DamageCause, DamageContext};
pub use item::{find_body_armor, ArmorType, BodyArmor, Item, ItemKind, ItemType};
pub use player::Player;
