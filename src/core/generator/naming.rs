//! Display names for generated player-copies.

/// Resolve the display name for copy `copy_index` of player `player_index`.
///
/// Indices are zero-based. `player_count` is the number of configured players
/// in the request and `copy_count` the number of copies of this player.
pub fn resolve_player_name(
    name: Option<&str>,
    player_index: usize,
    copy_index: usize,
    player_count: usize,
    copy_count: usize,
) -> String {
    let mut resolved = match name.filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        // A lone player's copies are numbered as separate players.
        None if player_count == 1 => format!("Player {}", copy_index + 1),
        None => format!("Player {}", player_index + 1),
    };
    if player_count > 1 && copy_count > 1 {
        resolved.push_str(&format!(" [{copy_index}]"));
    }
    resolved
}
