// Skill Icon Resolver: free-text skill label -> icon symbol + color class.
// Dictionary pass, then category fallback, then the generic code icon.

pub mod dictionary;
pub mod handlers;
pub mod icons;
pub mod resolver;

pub use resolver::{get_skill_icon, ResolvedIcon, SkillBadge};
