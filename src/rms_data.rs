//! Words with a fixed meaning in map scripts, with the descriptions shown when hovering them.
//!
//! Only the syntax and the predefined labels are listed. Terrain, object and other constants
//! are plain words to the annotator.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// What role a known word plays in a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Section,
    Directive,
    Conditional,
    Random,
    Brace,
    Label(LabelType),
}

/// The kind of predefined label, indicating how it's intended to be used in a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelType {
    /// The game mode selected in the lobby dropdown menu.
    GameMode,
    /// The size of the map, including the original sizes and HD's Ludicrous.
    MapSizeLegacy,
    /// The size of the map, using the sizes introduced in DE.
    MapSizeModern,
    /// The amount of resources with which players begin a game.
    StartingResources,
    /// The age at which players begin a game.
    StartingAge,
    /// Lobby checkboxes in addition to the dropdown menus.
    AdditionalLobbySettings,
    /// The number of players in the game.
    PlayerCount,
    /// The number of teams in the game.
    TeamCount,
    /// The number of players on a team. Teams are numbered in lobby order, with team 0 holding
    /// the players without a team.
    TeamSize,
    /// Whether a player is on a team. Players and teams are numbered in lobby order, not by
    /// color or the team number picked in the lobby.
    PlayerInTeam,
    /// The version of the game for which the map is generated.
    GameVersions,
}

impl fmt::Display for LabelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LabelType::*;
        let name = match self {
            GameMode => "Game Mode",
            MapSizeLegacy => "Map Size Legacy",
            MapSizeModern => "Map Size Modern",
            StartingResources => "Starting Resources",
            StartingAge => "Starting Age",
            AdditionalLobbySettings => "Additional Lobby Settings",
            PlayerCount => "Player Count",
            TeamCount => "Team Count",
            TeamSize => "Team Size",
            PlayerInTeam => "Player-in-team",
            GameVersions => "Game Versions",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub name: Cow<'static, str>,
    pub category: Category,
    pub description: Cow<'static, str>,
}

const SYNTAX: &[(&str, Category, &str)] = &[
    ("<PLAYER_SETUP>", Category::Section, "Section for player placement and global settings."),
    ("<LAND_GENERATION>", Category::Section, "Section for base terrain and player and non-player lands."),
    ("<ELEVATION_GENERATION>", Category::Section, "Section for hills."),
    ("<CLIFF_GENERATION>", Category::Section, "Section for cliffs."),
    ("<TERRAIN_GENERATION>", Category::Section, "Section for terrain patches layered over the lands."),
    ("<CONNECTION_GENERATION>", Category::Section, "Section for connections between lands."),
    ("<OBJECTS_GENERATION>", Category::Section, "Section for units, buildings and resources."),
    ("#define", Category::Directive, "Defines a label for use in if statements."),
    ("#undefine", Category::Directive, "Removes a defined label."),
    ("#const", Category::Directive, "Defines a named numeric constant."),
    ("#include_drs", Category::Directive, "Includes a script from the game's data files."),
    ("#includeXS", Category::Directive, "Includes an XS script file."),
    ("if", Category::Conditional, "Starts a conditional block, taken if the label is defined."),
    ("elseif", Category::Conditional, "Alternative branch, taken if its label is defined."),
    ("else", Category::Conditional, "Branch taken if no previous branch was."),
    ("endif", Category::Conditional, "Ends a conditional block."),
    ("start_random", Category::Random, "Starts a random block of percent_chance branches."),
    ("percent_chance", Category::Random, "Branch of a random block, chosen with the given percent chance."),
    ("end_random", Category::Random, "Ends a random block."),
    ("{", Category::Brace, "Opens an attribute block. Must be separated by whitespace."),
    ("}", Category::Brace, "Closes an attribute block. Must be separated by whitespace."),
];

const LABELS: &[(&str, LabelType, &str)] = &[
    ("REGICIDE", LabelType::GameMode, "The game mode is Regicide."),
    ("DEATH_MATCH", LabelType::GameMode, "The game mode is Death Match."),
    ("KING_OT_HILL", LabelType::GameMode, "The game mode is King of the Hill."),
    ("EMPIRE_WARS", LabelType::GameMode, "The game mode is Empire Wars."),
    ("BATTLE_ROYALE", LabelType::GameMode, "The game mode is Battle Royale."),
    ("TINY_MAP", LabelType::MapSizeLegacy, "The map is Tiny (2 players)."),
    ("SMALL_MAP", LabelType::MapSizeLegacy, "The map is Small (3 players)."),
    ("MEDIUM_MAP", LabelType::MapSizeLegacy, "The map is Medium (4 players)."),
    ("LARGE_MAP", LabelType::MapSizeLegacy, "The map is Normal (5-6 players)."),
    ("HUGE_MAP", LabelType::MapSizeLegacy, "The map is Large (7-8 players)."),
    ("GIGANTIC_MAP", LabelType::MapSizeLegacy, "The map is Giant or larger."),
    ("LUDIKRIS_MAP", LabelType::MapSizeModern, "The map is Ludicrous."),
    ("LOW_RESOURCES", LabelType::StartingResources, "Players start with low resources."),
    ("MEDIUM_RESOURCES", LabelType::StartingResources, "Players start with medium resources."),
    ("HIGH_RESOURCES", LabelType::StartingResources, "Players start with high resources."),
    ("DARK_START", LabelType::StartingAge, "Players start in the Dark Age."),
    ("FEUDAL_START", LabelType::StartingAge, "Players start in the Feudal Age."),
    ("CASTLE_START", LabelType::StartingAge, "Players start in the Castle Age."),
    ("IMPERIAL_START", LabelType::StartingAge, "Players start in the Imperial Age."),
    ("POST_IMPERIAL_START", LabelType::StartingAge, "Players start in the Post-Imperial Age."),
    ("FIXED_POSITIONS", LabelType::AdditionalLobbySettings, "Team positions are fixed."),
    ("AI_PLAYERS", LabelType::AdditionalLobbySettings, "At least one player is an AI."),
    ("1_PLAYER_GAME", LabelType::PlayerCount, "There is 1 player."),
    ("2_PLAYER_GAME", LabelType::PlayerCount, "There are 2 players."),
    ("3_PLAYER_GAME", LabelType::PlayerCount, "There are 3 players."),
    ("4_PLAYER_GAME", LabelType::PlayerCount, "There are 4 players."),
    ("5_PLAYER_GAME", LabelType::PlayerCount, "There are 5 players."),
    ("6_PLAYER_GAME", LabelType::PlayerCount, "There are 6 players."),
    ("7_PLAYER_GAME", LabelType::PlayerCount, "There are 7 players."),
    ("8_PLAYER_GAME", LabelType::PlayerCount, "There are 8 players."),
    ("1_TEAM_GAME", LabelType::TeamCount, "There is 1 team of at least 2 players."),
    ("2_TEAM_GAME", LabelType::TeamCount, "There are 2 teams of at least 2 players."),
    ("3_TEAM_GAME", LabelType::TeamCount, "There are 3 teams of at least 2 players."),
    ("4_TEAM_GAME", LabelType::TeamCount, "There are 4 teams of at least 2 players."),
    ("UP_AVAILABLE", LabelType::GameVersions, "The map is generated by UserPatch 1.5 or later."),
    ("UP_EXTENSION", LabelType::GameVersions, "The map is generated with the UserPatch extension."),
    ("DE_AVAILABLE", LabelType::GameVersions, "The map is generated by Definitive Edition."),
];

const MAX_TEAM: u32 = 4;
const MAX_PLAYER: u32 = 8;

fn label(name: String, label_type: LabelType, description: String) -> Keyword {
    Keyword {
        name: Cow::Owned(name),
        category: Category::Label(label_type),
        description: Cow::Owned(description),
    }
}

/// `TEAMx_SIZEy` and `PLAYERx_TEAMy`, one label per team, size and player.
fn team_labels() -> Vec<Keyword> {
    let mut labels = Vec::new();
    for team in 0..=MAX_TEAM {
        for size in 0..=MAX_PLAYER {
            labels.push(label(
                format!("TEAM{}_SIZE{}", team, size),
                LabelType::TeamSize,
                format!("Team {} in lobby order has {} players.", team, size),
            ));
        }
    }
    for player in 1..=MAX_PLAYER {
        for team in 0..=MAX_TEAM {
            labels.push(label(
                format!("PLAYER{}_TEAM{}", player, team),
                LabelType::PlayerInTeam,
                format!("Player {} in lobby order is on team {}.", player, team),
            ));
        }
    }
    labels
}

static KEYWORDS: Lazy<HashMap<String, Keyword>> = Lazy::new(|| {
    let syntax = SYNTAX.iter().map(|&(name, category, description)| Keyword {
        name: Cow::Borrowed(name),
        category,
        description: Cow::Borrowed(description),
    });
    let labels = LABELS.iter().map(|&(name, label_type, description)| Keyword {
        name: Cow::Borrowed(name),
        category: Category::Label(label_type),
        description: Cow::Borrowed(description),
    });
    syntax
        .chain(labels)
        .chain(team_labels())
        .map(|k| (k.name.to_string(), k))
        .collect()
});

/// Looks up a word. Matching is case sensitive, as in the game.
pub fn lookup(word: &str) -> Option<&'static Keyword> {
    KEYWORDS.get(word)
}
