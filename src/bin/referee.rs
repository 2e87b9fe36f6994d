use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use chess_referee::board::{PieceId, Team};
use chess_referee::game::ChessMatch;
use chess_referee::EngineConfig;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(&path).with_context(|| format!("loading engine config from {path}"))?,
        None => EngineConfig::default(),
    };
    info!(rules = ?config.rules, fallback = ?config.fallback, "starting referee");

    Referee::new(config).run(io::stdin().lock(), io::stdout().lock())
}

/// Line-oriented driver around one match.
struct Referee {
    chess_match: ChessMatch,
    is_running: bool,
}

impl Referee {
    fn new(config: EngineConfig) -> Self {
        Self {
            chess_match: ChessMatch::new(config),
            is_running: true,
        }
    }

    fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line?;
            if let Err(err) = self.parse_command(&line, &mut output) {
                warn!(command = line.trim(), "{err:#}");
                writeln!(output, "error: {err:#}")?;
            }
            output.flush()?;
            if !self.is_running {
                break;
            }
        }
        Ok(())
    }

    fn parse_command(&mut self, full_command: &str, output: &mut impl Write) -> anyhow::Result<()> {
        let mut words = full_command.split_whitespace();
        let command = words.next().unwrap_or("");
        let args: Vec<&str> = words.collect();
        match command {
            "move" => self.move_piece(&args, output)?,
            "moves" => self.list_moves(&args, output)?,
            "pieces" => writeln!(output, "{}", serde_json::to_string(self.chess_match.pieces())?)?,
            "board" => writeln!(output, "{}", self.chess_match)?,
            "material" => {
                for team in [Team::White, Team::Black] {
                    writeln!(output, "{team}: {:?}", self.chess_match.material(team))?;
                }
            }
            "reset" => {
                self.chess_match.reset()?;
                writeln!(output, "{}", serde_json::json!({ "match_reset": true }))?;
            }
            "rules" => write!(output, "{}", toml::to_string(self.chess_match.config())?)?,
            "quit" => self.is_running = false,
            "" => {}
            _ => debug!(command, "ignoring unknown command"),
        }
        Ok(())
    }

    fn move_piece(&mut self, args: &[&str], output: &mut impl Write) -> anyhow::Result<()> {
        let [id, row, column] = args else {
            bail!("usage: move <id> <row> <column>");
        };
        let id = PieceId(id.parse().with_context(|| format!("invalid piece id {id:?}"))?);
        let row: i64 = row.parse().with_context(|| format!("invalid row {row:?}"))?;
        let column: i64 = column.parse().with_context(|| format!("invalid column {column:?}"))?;

        let outcome = self.chess_match.move_piece(id, row, column)?;
        writeln!(output, "{}", serde_json::to_string(&outcome)?)?;
        Ok(())
    }

    fn list_moves(&self, args: &[&str], output: &mut impl Write) -> anyhow::Result<()> {
        let [id] = args else {
            bail!("usage: moves <id>");
        };
        let id = PieceId(id.parse().with_context(|| format!("invalid piece id {id:?}"))?);
        let candidates = self.chess_match.candidates(id)?;
        let squares: Vec<(u8, u8)> = candidates.squares.squares().map(|square| (square.row, square.column)).collect();
        writeln!(output, "{}", serde_json::to_string(&squares)?)?;
        Ok(())
    }
}
