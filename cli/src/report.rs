use ljbox_core::State;

pub const INITIAL_TITLE: &str = "Initial positions of each particle:";
pub const FINAL_TITLE: &str = "Final positions of each particle:";

/// Title line and one `Particle {i}: X = {x}, Y = {y}` line per particle, 1-based.
pub fn format_positions(title: &str, state: &State) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for (i, particle) in state.particles.iter().enumerate() {
        out.push_str(&format!("Particle {}: X = {:.3}, Y = {:.3}\n",
                              i + 1, particle.position.x, particle.position.y));
    }
    out
}

/// Both blocks separated by a blank line.
pub fn format_report(initial: &State, final_state: &State) -> String {
    format!("{}\n{}",
            format_positions(INITIAL_TITLE, initial),
            format_positions(FINAL_TITLE, final_state))
}
