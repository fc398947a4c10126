// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use seabattle::{
    render,
    session::{Message, Presenter, Prompter, Reply, RetryReason, Session, SessionError, SetupDefaults},
    text::{Localize, Texts},
    Game, PlacementRule, Player,
};

use crate::{
    lang::Catalog,
    settings::{Settings, DEFAULT_SETTINGS_FILE},
};

mod lang;
mod settings;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "BATTLESHIP_LOG";

fn main() {
    init_logging();
    let matches = App::new("Battleship")
        .version("1.0")
        .about("Command line battleship against a random machine opponent.")
        .arg(
            Arg::with_name("board_size")
                .long("board-size")
                .value_name("SIZE")
                .help("side length of the square board")
                .takes_value(true)
                .validator(is_number),
        )
        .arg(
            Arg::with_name("ships")
                .long("ships")
                .value_name("AMOUNT")
                .help("number of ships in each fleet")
                .takes_value(true)
                .validator(is_number),
        )
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first-player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "machine", "random"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("rule")
                .long("rule")
                .value_name("RULE")
                .help("placement rule, overriding the saved setting")
                .takes_value(true)
                .possible_values(&["strict", "overlap"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for a reproducible machine opponent")
                .takes_value(true)
                .validator(is_number),
        )
        .arg(
            Arg::with_name("settings")
                .long("settings")
                .value_name("PATH")
                .help("settings file")
                .takes_value(true)
                .default_value(DEFAULT_SETTINGS_FILE),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        error!(%err, "game failed");
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

/// Install the log subscriber. Logs go to stderr so they never mix with the boards.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn is_number(value: String) -> Result<(), String> {
    value
        .parse::<u64>()
        .map(|_| ())
        .map_err(|_| format!("{} is not a non-negative number", value))
}

fn run(matches: &ArgMatches) -> Result<(), SessionError> {
    let mut settings = Settings::load(matches.value_of("settings").unwrap_or(DEFAULT_SETTINGS_FILE))?;
    let mut catalog = Catalog::load(&settings.lang_folder())?;
    if !catalog.set_language(settings.lang()) {
        warn!(lang = settings.lang(), "language not found, using English");
    }
    let mut rng = match matches.value_of("seed").and_then(|s| s.parse().ok()) {
        Some(seed) => {
            debug!(seed, "seeded machine opponent");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut session =
        Session::new(InputReader::new(stdin.lock()), Terminal::new(catalog)).with_pauses();
    match launcher(&mut session, matches, &mut settings, &mut rng) {
        Err(SessionError::Aborted) => {
            session.output_mut().line("");
            session.output_mut().say("closing", &[]);
            Ok(())
        }
        other => other,
    }
}

/// Greet on first launch, then run the main menu until the player quits.
fn launcher<I: Prompter>(
    session: &mut Session<I, Terminal>,
    matches: &ArgMatches,
    settings: &mut Settings,
    rng: &mut StdRng,
) -> Result<(), SessionError> {
    let title = render::title(session.output_mut().texts());
    session.output_mut().show(&title);
    if settings.first_launch() {
        choose_language(session, settings)?;
        settings.set_first_launch(false);
        settings.save()?;
        let name = session.output_mut().texts().text("gameName");
        session.output_mut().say("welcome", &[name]);
        session.output_mut().say("quitHint", &[]);
    }

    loop {
        let items: Vec<_> = MenuItem::ALL
            .iter()
            .map(|item| (*item, session.output_mut().texts().text(item.key())))
            .collect();
        let choice = choose(session, &items)?;
        info!(?choice, "menu");
        match choice {
            MenuItem::Play => play(session, matches, settings, rng)?,
            MenuItem::Statistics => session.output_mut().say("noStats", &[]),
            MenuItem::Settings => settings_menu(session, settings)?,
            MenuItem::Quit => return Err(SessionError::Aborted),
        }
    }
}

/// Ask for a language by identifier or name and switch to it.
fn choose_language<I: Prompter>(
    session: &mut Session<I, Terminal>,
    settings: &mut Settings,
) -> Result<(), SessionError> {
    let catalog = session.output_mut().catalog().clone();
    let prompt = catalog.text("langInput");
    let lang = session.ask(&prompt, |line| match catalog.find_language(line) {
        Some(id) => Reply::Value(id),
        None => Reply::Retry(RetryReason::UnknownOption(catalog.language_list())),
    })?;
    if session.output_mut().catalog_mut().set_language(&lang) {
        info!(%lang, "language selected");
        settings.set_lang(&lang);
    }
    Ok(())
}

/// The settings submenu. Every change is saved right away.
fn settings_menu<I: Prompter>(
    session: &mut Session<I, Terminal>,
    settings: &mut Settings,
) -> Result<(), SessionError> {
    let items = {
        let output = session.output_mut();
        let texts = output.texts();
        vec![
            (SettingsItem::Language, texts.text("changeLangSetting")),
            (
                SettingsItem::Rule,
                texts.format("changeRuleSetting", &[settings.placement_rule().to_string()]),
            ),
            (SettingsItem::Back, texts.text("backSetting")),
        ]
    };
    match choose(session, &items)? {
        SettingsItem::Language => {
            choose_language(session, settings)?;
            let name = session.output_mut().catalog().language_name(settings.lang());
            session.output_mut().say("langChanged", &[name]);
        }
        SettingsItem::Rule => {
            let rule = match settings.placement_rule() {
                PlacementRule::Strict => PlacementRule::OverlapOnly,
                PlacementRule::OverlapOnly => PlacementRule::Strict,
            };
            settings.set_placement_rule(rule);
            session.output_mut().say("ruleChanged", &[rule.to_string()]);
        }
        SettingsItem::Back => return Ok(()),
    }
    settings.save()?;
    debug!(path = %settings.path().display(), "settings changed");
    let path = settings.path().display().to_string();
    session.output_mut().say("settingsSaved", &[path]);
    Ok(())
}

/// Play a single match from setup to the winner.
fn play<I: Prompter, O: Presenter>(
    session: &mut Session<I, O>,
    matches: &ArgMatches,
    settings: &Settings,
    rng: &mut StdRng,
) -> Result<(), SessionError> {
    let number = |name: &str| matches.value_of(name).and_then(|v| v.parse::<usize>().ok());
    let defaults = SetupDefaults {
        board_size: number("board_size"),
        ships_amount: number("ships"),
        first_player: matches.value_of("first_player").map(|p| {
            if p.eq_ignore_ascii_case("random") {
                rng.gen()
            } else if p.eq_ignore_ascii_case("machine") {
                Player::Machine
            } else {
                Player::Human
            }
        }),
        rule: matches
            .value_of("rule")
            .and_then(|r| r.parse().ok())
            .unwrap_or_else(|| settings.placement_rule()),
    };
    let config = session.setup(&defaults)?;
    info!(?config, "starting match");
    let mut game = Game::new(config);
    session.collect_human_placements(&mut game)?;
    game.place_machine_fleet(rng)?;
    session.play_to_completion(&mut game, rng)?;
    Ok(())
}

/// List numbered entries and ask for one.
fn choose<I: Prompter, T: Copy>(
    session: &mut Session<I, Terminal>,
    items: &[(T, String)],
) -> Result<T, SessionError> {
    session.output_mut().line("");
    for (i, (_, name)) in items.iter().enumerate() {
        session.output_mut().line(&format!("{}. {}", i + 1, name));
    }
    let prompt = session.output_mut().texts().text("selectMenu");
    session.ask(&prompt, |line| menu_choice(line, items))
}

/// Accept an entry by its number or by its name.
fn menu_choice<T: Copy>(line: &str, items: &[(T, String)]) -> Reply<T> {
    let line = line.to_lowercase();
    for (i, (item, name)) in items.iter().enumerate() {
        if line == (i + 1).to_string() || line == name.to_lowercase() {
            return Reply::Value(*item);
        }
    }
    let options = items
        .iter()
        .enumerate()
        .map(|(i, (_, name))| format!("{} ({})", name, i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    Reply::Retry(RetryReason::UnknownOption(options))
}

/// Entries of the main menu.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum MenuItem {
    Play,
    Statistics,
    Settings,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 4] = [
        MenuItem::Play,
        MenuItem::Statistics,
        MenuItem::Settings,
        MenuItem::Quit,
    ];

    fn key(self) -> &'static str {
        match self {
            MenuItem::Play => "playMenuName",
            MenuItem::Statistics => "statsMenuName",
            MenuItem::Settings => "settingsMenuName",
            MenuItem::Quit => "quitMenuName",
        }
    }
}

/// Entries of the settings menu.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum SettingsItem {
    Language,
    Rule,
    Back,
}

/// Reads prompted lines from a buffered reader.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> Prompter for InputReader<B> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.buf.clone()))
    }
}

/// Writes everything to stdout, in the language of its catalog.
struct Terminal {
    catalog: Catalog,
}

impl Terminal {
    fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Print a line of plain text.
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    /// Print the catalog entry for `key`.
    fn say(&mut self, key: &str, args: &[String]) {
        println!("{}", self.catalog.format(key, args));
    }
}

impl Presenter for Terminal {
    fn show(&mut self, text: &str) {
        print!("{}", text);
    }

    fn message(&mut self, message: &Message) {
        println!("{}", message.localize(&self.catalog));
    }

    fn clear(&mut self) {
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)) {
            warn!(%err, "could not clear the screen");
        }
    }

    fn texts(&self) -> &dyn Texts {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<(MenuItem, String)> {
        MenuItem::ALL
            .iter()
            .map(|item| (*item, Catalog::default().text(item.key())))
            .collect()
    }

    #[test]
    fn menu_accepts_numbers_and_names() {
        let items = items();
        assert_eq!(menu_choice("1", &items), Reply::Value(MenuItem::Play));
        assert_eq!(menu_choice("statistics", &items), Reply::Value(MenuItem::Statistics));
        assert_eq!(menu_choice("SETTINGS", &items), Reply::Value(MenuItem::Settings));
        assert_eq!(menu_choice("4", &items), Reply::Value(MenuItem::Quit));
        assert_eq!(
            menu_choice("5", &items),
            Reply::Retry(RetryReason::UnknownOption(
                "Play (1), Statistics (2), Settings (3), Quit (4)".to_owned()
            ))
        );
    }

    #[test]
    fn menu_names_follow_the_language() {
        let items = vec![(SettingsItem::Language, "Cambiar idioma".to_owned())];
        assert_eq!(
            menu_choice("cambiar idioma", &items),
            Reply::Value(SettingsItem::Language)
        );
    }

    #[test]
    fn input_reader_reports_end_of_input() {
        let mut reader = InputReader::new(io::Cursor::new("3 4\n"));
        assert_eq!(reader.read_line("").unwrap().as_deref(), Some("3 4\n"));
        assert_eq!(reader.read_line("").unwrap(), None);
    }
}
