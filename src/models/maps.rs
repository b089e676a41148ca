use serde::Serialize;

/// A race course known to the store. `in_rotation` marks courses currently
/// eligible for active play; retired courses keep their rows (and their
/// highscores) but stay out of the scoring views.
#[derive(Debug, Clone, Serialize)]
pub struct MapEntity {
    pub id: i64,
    pub name: String,
    pub in_rotation: bool,
}
