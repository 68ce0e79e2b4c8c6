use crate::io::Io;
use crate::settings::{Glyphs, Settings};
use anyhow::{anyhow, bail, Error as Anyhow};
use clap::Parser;
use lib::chess::{Color, Move, Piece, Role, Square};
use lib::game::{Event, Game, Summary};
use std::io::{self, stdin, stdout, ErrorKind, Read, Write};
use std::{cell::RefCell, rc::Rc};
use tracing::{info, instrument, warn};

const HELP: &str = "\
commands:
  <square>               select a piece and list its moves, e.g. `e2`
  <from><to>[promotion]  play a move, e.g. `e2e4` or `e7e8q`
  reset                  start a new game
  help                   show this message
  quit                   leave";

/// Play a game of chess against yourself in the terminal.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Presentation settings, e.g. `(glyphs: letters, promotion: Some(queen))`.
    #[clap(short, long, default_value_t)]
    settings: Settings,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let io = Io::new(stdout(), stdin());
        Session::new(Game::new(), io, self.settings).run()
    }
}

/// An interactive game driven by text commands.
struct Session<W: Write, R: Read> {
    game: Game,
    io: Io<W, R>,
    settings: Settings,
    ended: Rc<RefCell<Option<Summary>>>,
}

impl<W: Write, R: Read> Session<W, R> {
    fn new(mut game: Game, io: Io<W, R>, settings: Settings) -> Self {
        let ended = Rc::new(RefCell::new(None));

        game.subscribe({
            let ended = ended.clone();
            move |e: &Event| {
                if let Event::Ended(summary) = e {
                    *ended.borrow_mut() = Some(summary.clone());
                }
            }
        });

        Session {
            game,
            io,
            settings,
            ended,
        }
    }

    /// Reads commands until the input is exhausted or the player quits.
    fn run(&mut self) -> Result<(), Anyhow> {
        self.show()?;

        loop {
            self.io.prompt(format_args!("{} to move>", self.game.turn()))?;

            let line = match self.io.recv() {
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                line => line?,
            };

            match line.trim() {
                "" => continue,
                "quit" | "exit" => break,
                "help" => self.io.send(HELP)?,
                "reset" => {
                    self.game.reset();
                    info!("new game");
                    self.show()?;
                }

                cmd => {
                    if let Err(e) = self.execute(cmd) {
                        warn!(%cmd, error = %e, "rejected input");
                        self.io.send(format_args!("error: {e}"))?;
                    }
                }
            }
        }

        self.io.flush()?;
        Ok(())
    }

    fn execute(&mut self, cmd: &str) -> Result<(), Anyhow> {
        let invalid = || anyhow!("unknown command `{cmd}`, type `help` for a list of commands");

        match cmd.len() {
            2 => {
                let square: Square = cmd.parse()?;
                self.choose(square)
            }

            4 | 5 => {
                let whence: Square = cmd.get(0..2).ok_or_else(invalid)?.parse()?;
                let whither: Square = cmd.get(2..4).ok_or_else(invalid)?.parse()?;
                let promotion = match cmd.get(4..).ok_or_else(invalid)? {
                    "" => None,
                    r => Some(r.parse::<Role>()?),
                };

                self.submit(whence, whither, promotion)
            }

            _ => Err(invalid()),
        }
    }

    fn choose(&mut self, square: Square) -> Result<(), Anyhow> {
        let moves = self.game.select(square);

        if moves.is_empty() {
            self.io.send(format_args!("no legal moves from {square}"))?;
        } else {
            let list: Vec<_> = moves.iter().map(Move::to_string).collect();
            self.io.send(list.join(" "))?;
        }

        Ok(())
    }

    fn submit(&mut self, whence: Square, whither: Square, promotion: Option<Role>) -> Result<(), Anyhow> {
        let Some(m) = self.game.select(whence).iter().find(|m| m.whither() == whither).copied() else {
            bail!("`{whence}{whither}` is not a legal move");
        };

        let preset = promotion.or_else(|| self.settings.promotion.map(Role::from));

        match preset {
            Some(r) if promotion.is_some() || m.is_promotion() => self.game.play(m.promote(r))?,
            _ => {
                let io = &mut self.io;
                self.game.play_with(m, |m| {
                    ask(io, m).unwrap_or_else(|e| {
                        warn!(error = %e, "promoting to a queen");
                        Role::Queen
                    })
                })?
            }
        };

        self.show()?;

        let summary = self.ended.borrow_mut().take();
        if let Some(summary) = summary {
            self.report(&summary)?;
        }

        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        let glyphs = self.settings.glyphs;
        let board = self.game.board();

        match glyphs {
            Glyphs::Figurines => self.io.send(board)?,
            Glyphs::Letters => self.io.send(format_args!("{board:#}"))?,
        }

        if let Some(m) = self.game.last_move() {
            self.io.send(format_args!("last move: {m}"))?;
        }

        for side in Color::ALL {
            let lost = self.game.captured(side);
            if !lost.is_empty() {
                self.io.send(format_args!("{side} lost: {}", render(glyphs, lost)))?;
            }
        }

        if self.game.status().is_check() {
            self.io.send(format_args!("{} is in check", self.game.turn()))?;
        }

        Ok(())
    }

    fn report(&mut self, summary: &Summary) -> io::Result<()> {
        let history: Vec<_> = summary.history.iter().map(Move::to_string).collect();

        self.io.send(format_args!("game over: {}", summary.outcome))?;
        self.io.send(format_args!("moves: {}", history.join(" ")))?;

        for side in Color::ALL {
            let lost = render(self.settings.glyphs, summary.captured(side));
            self.io.send(format_args!("{side} lost: {lost}"))?;
        }

        self.io.send("type `reset` to play again")
    }
}

fn render(glyphs: Glyphs, pieces: &[Piece]) -> String {
    let glyphs: Vec<_> = match glyphs {
        Glyphs::Figurines => pieces.iter().map(|p| p.to_string()).collect(),
        Glyphs::Letters => pieces.iter().map(|p| format!("{p:#}")).collect(),
    };

    glyphs.join(" ")
}

/// Asks the player what to promote to until they answer a promotable role.
fn ask<W: Write, R: Read>(io: &mut Io<W, R>, m: &Move) -> io::Result<Role> {
    loop {
        io.prompt(format_args!("promote {m} to [n, b, r, q]?"))?;

        match io.recv()?.trim().parse::<Role>() {
            Ok(r) if r.is_promotable() => return Ok(r),
            _ => io.send("expected one of n, b, r or q")?,
        }
    }
}
