//! Integration tests for the lexer over the sample maps.

use std::fs;
use std::path::{Path, PathBuf};

use aoe2_rms::annotator::{AnnotatedFile, Highlight};
use aoe2_rms::{html_writer, maps, Kind, Position, Token};

fn maps_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("maps")
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rms-it-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// The lexing process preserves enough information to copy a file without changes.
#[test]
fn copy_files() {
    let out = scratch_dir("copy");
    for path in maps::get_rms_files(&maps_dir()).unwrap() {
        let source = fs::read(&path).unwrap();
        let tokens = maps::tokenize_file(&path).unwrap();
        let copy = out.join(path.file_name().unwrap());
        tokens.write_to_path(&copy).unwrap();
        assert_eq!(fs::read(&copy).unwrap(), source, "{}", path.display());
    }
    fs::remove_dir_all(&out).unwrap();
}

#[test]
fn tokens_are_adjacent() {
    for path in maps::get_rms_files(&maps_dir()).unwrap() {
        let tokens = maps::tokenize_file(&path).unwrap();
        assert_eq!(tokens.tokens()[0].start(), Position::new(1, 1));
        for pair in tokens.tokens().windows(2) {
            assert_eq!(pair[0].end(), pair[1].start(), "{}", path.display());
        }
    }
}

#[test]
fn quirks_map() {
    let tokens = maps::tokenize_file(&maps_dir().join("quirks.rms")).unwrap();
    let significant: Vec<(Kind, &str)> =
        tokens.significant().map(|t| (t.kind(), t.lexeme())).collect();
    assert_eq!(
        significant,
        vec![
            (Kind::Word, "hello{}{/*}*/_\u{200B}_"),
            (Kind::Word, "base_size"),
            (Kind::Word, "7"),
            (Kind::Comment, "/*not closed */"),
            (Kind::Word, "*/"),
            (Kind::Word, "stray"),
        ]
    );
    let stray = tokens.significant().nth(4).map(Token::start);
    assert_eq!(stray, Some(Position::new(2, 17)));
}

#[test]
fn unterminated_map() {
    let tokens = maps::tokenize_file(&maps_dir().join("unterminated.rms")).unwrap();
    let comment = tokens.unterminated_comment().unwrap();
    assert_eq!(comment.start(), Position::new(2, 20));
    assert_eq!(comment.end(), Position::new(6, 1));
    assert!(comment.lexeme().ends_with("create_object TOWN_CENTER\n"));
    assert_eq!(tokens.words().count(), 2);
}

#[test]
fn sample_map_annotations() {
    let tokens = maps::tokenize_file(&maps_dir().join("sample_land.rms")).unwrap();
    let file = AnnotatedFile::annotate(&tokens);
    assert_eq!(file.num_comments(), 2);

    let highlight_of = |word: &str| {
        file.tokens()
            .iter()
            .find(|t| t.token().lexeme() == word)
            .and_then(|t| t.annotation())
            .map(|a| a.highlight())
    };
    assert_eq!(highlight_of("<LAND_GENERATION>"), Some(Highlight::Section));
    assert_eq!(highlight_of("#const"), Some(Highlight::Directive));
    assert_eq!(highlight_of("LUDIKRIS_MAP"), Some(Highlight::Label));
    assert_eq!(highlight_of("rnd(20,40)"), Some(Highlight::Rnd));
    assert_eq!(highlight_of("start_random"), Some(Highlight::Random));
    assert_eq!(highlight_of("{terrain_type"), None);
    assert_eq!(highlight_of("WATER}"), None);
}

#[test]
fn renders_every_map() {
    for path in maps::get_rms_files(&maps_dir()).unwrap() {
        let tokens = maps::tokenize_file(&path).unwrap();
        let file = AnnotatedFile::annotate(&tokens);
        let mut out = Vec::new();
        html_writer::write_debug_file(&file, &mut out).unwrap();
        let html = String::from_utf8(out).unwrap();
        let lines = tokens.reconstruct().split_inclusive('\n').count();
        assert_eq!(html.matches("<li>").count(), lines, "{}", path.display());
    }
}

#[test]
fn scans_files_on_separate_threads() {
    let paths = maps::get_rms_files(&maps_dir()).unwrap();
    let sequential: Vec<_> = paths.iter().map(|p| maps::tokenize_file(p).unwrap()).collect();
    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|p| scope.spawn(move || maps::tokenize_file(p).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sequential, parallel);
}
