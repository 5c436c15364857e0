use anyhow::Result;
use tracing::info;

use draughts_engine::GameState;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("draughts starting");

    let game = GameState::new();
    info!(
        to_move = %game.current_player(),
        layout = %game.board().to_layout(),
        "new game\n{}",
        game.board().pretty()
    );
    Ok(())
}
