use std::collections::HashSet;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::GamelistError;
use crate::record::{Field, GameRecord, tags};

/// Root element name ES-DE writes.
pub const DEFAULT_ROOT: &str = "gameList";

/// Position of a `<game>` within its document.
///
/// Ids stay valid until games are removed from the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(usize);

/// A direct child of the root element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Game(GameRecord),
    /// Any other element (or comment), kept as the exact source text.
    Raw(String),
}

/// An in-memory gamelist document.
#[derive(Debug, Clone, PartialEq)]
pub struct Gamelist {
    root: String,
    root_attributes: Vec<(String, String)>,
    nodes: Vec<Node>,
}

impl Default for Gamelist {
    fn default() -> Self {
        Self::new()
    }
}

impl Gamelist {
    /// An empty `<gameList>`.
    pub fn new() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            root_attributes: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Read and parse a gamelist file.
    pub fn open(path: &Path) -> Result<Self, GamelistError> {
        parse_gamelist_file(path)
    }

    pub fn root_name(&self) -> &str {
        &self.root
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Append a game and return its id.
    pub fn push(&mut self, game: GameRecord) -> GameId {
        self.nodes.push(Node::Game(game));
        GameId(self.nodes.len() - 1)
    }

    /// All games in document order.
    pub fn games(&self) -> impl Iterator<Item = (GameId, &GameRecord)> {
        self.nodes.iter().enumerate().filter_map(|(i, node)| match node {
            Node::Game(game) => Some((GameId(i), game)),
            Node::Raw(_) => None,
        })
    }

    /// All games in document order, mutably.
    pub fn games_mut(&mut self) -> impl Iterator<Item = (GameId, &mut GameRecord)> {
        self.nodes
            .iter_mut()
            .enumerate()
            .filter_map(|(i, node)| match node {
                Node::Game(game) => Some((GameId(i), game)),
                Node::Raw(_) => None,
            })
    }

    pub fn game(&self, id: GameId) -> Option<&GameRecord> {
        match self.nodes.get(id.0) {
            Some(Node::Game(game)) => Some(game),
            _ => None,
        }
    }

    pub fn game_mut(&mut self, id: GameId) -> Option<&mut GameRecord> {
        match self.nodes.get_mut(id.0) {
            Some(Node::Game(game)) => Some(game),
            _ => None,
        }
    }

    /// Number of games (non-game children are not counted).
    pub fn len(&self) -> usize {
        self.games().count()
    }

    pub fn is_empty(&self) -> bool {
        self.games().next().is_none()
    }

    /// Remove the given games, keeping everything else in order.
    /// Returns how many games were removed. Invalidates existing ids.
    pub fn remove_games(&mut self, ids: &[GameId]) -> usize {
        let doomed: HashSet<usize> = ids
            .iter()
            .map(|id| id.0)
            .filter(|&i| matches!(self.nodes.get(i), Some(Node::Game(_))))
            .collect();

        let mut index = 0;
        self.nodes.retain(|_| {
            let keep = !doomed.contains(&index);
            index += 1;
            keep
        });

        doomed.len()
    }

    /// Serialize the document in ES-DE layout.
    pub fn to_xml_string(&self) -> String {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\"?>\n");
        write_open_tag(&mut xml, &self.root, &self.root_attributes);
        xml.push('\n');

        for node in &self.nodes {
            match node {
                Node::Game(game) => write_game(&mut xml, game),
                Node::Raw(raw) => {
                    xml.push_str("  ");
                    xml.push_str(raw);
                    xml.push('\n');
                }
            }
        }

        xml.push_str("</");
        xml.push_str(&self.root);
        xml.push_str(">\n");
        xml
    }

    /// Write the document to `path`, going through a temporary file so a
    /// failed write never leaves a truncated gamelist behind.
    pub fn write_to(&self, path: &Path) -> Result<(), GamelistError> {
        let tmp = temp_path(path);
        fs::write(&tmp, self.to_xml_string())?;
        fs::rename(&tmp, path)?;
        log::debug!("Wrote {} games to {}", self.len(), path.display());
        Ok(())
    }
}

impl FromStr for Gamelist {
    type Err = GamelistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_document(s)
    }
}

/// Parse a gamelist from any buffered reader.
pub fn parse_gamelist<R: BufRead>(mut reader: R) -> Result<Gamelist, GamelistError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_document(&contents)
}

/// Parse a gamelist from a file path.
pub fn parse_gamelist_file(path: &Path) -> Result<Gamelist, GamelistError> {
    if !path.exists() {
        return Err(GamelistError::NotFound(path.to_path_buf()));
    }
    let file = fs::File::open(path)?;
    parse_gamelist(std::io::BufReader::new(file))
}

/// `gamelist.xml` -> `gamelist.xml.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

fn parse_document(src: &str) -> Result<Gamelist, GamelistError> {
    let mut xml = Reader::from_str(src);

    let mut doc: Option<Gamelist> = None;
    let mut current_game: Option<GameRecord> = None;
    let mut current_field: Option<Field> = None;
    // 1 = root, 2 = root child, 3 = field of a game
    let mut depth = 0usize;

    loop {
        let start = xml.buffer_position() as usize;
        match xml.read_event()? {
            Event::Start(e) => {
                depth += 1;
                match depth {
                    1 => doc = Some(open_root(doc.is_some(), &e)?),
                    2 if e.name().as_ref() == tags::GAME.as_bytes() => {
                        current_game = Some(GameRecord::with_attributes(read_attributes(&e)?));
                    }
                    2 => {
                        xml.read_to_end(e.name())?;
                        depth -= 1;
                        let end = xml.buffer_position() as usize;
                        push_raw(&mut doc, &src[start..end]);
                    }
                    3 => current_field = Some(Field::new(tag_name(&e), String::new())),
                    // Nested markup inside a field: its text is folded into the field.
                    _ => {}
                }
            }
            Event::Empty(e) => match depth {
                0 => doc = Some(open_root(doc.is_some(), &e)?),
                1 if e.name().as_ref() == tags::GAME.as_bytes() => {
                    let game = GameRecord::with_attributes(read_attributes(&e)?);
                    if let Some(doc) = doc.as_mut() {
                        doc.nodes.push(Node::Game(game));
                    }
                }
                1 => {
                    let end = xml.buffer_position() as usize;
                    push_raw(&mut doc, &src[start..end]);
                }
                2 => {
                    if let Some(game) = current_game.as_mut() {
                        game.push_field(Field::new(tag_name(&e), String::new()));
                    }
                }
                _ => {}
            },
            Event::Text(e) => {
                if let Some(field) = current_field.as_mut() {
                    field.value.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(field) = current_field.as_mut() {
                    field.value.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::Comment(_) if depth == 1 => {
                let end = xml.buffer_position() as usize;
                push_raw(&mut doc, &src[start..end]);
            }
            Event::End(_) => {
                match depth {
                    3 => {
                        if let (Some(game), Some(field)) =
                            (current_game.as_mut(), current_field.take())
                        {
                            game.push_field(field);
                        }
                    }
                    2 => {
                        if let (Some(doc), Some(game)) = (doc.as_mut(), current_game.take()) {
                            doc.nodes.push(Node::Game(game));
                        }
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(GamelistError::invalid_document(
            "unexpected end of document",
        ));
    }

    doc.ok_or_else(|| GamelistError::invalid_document("no root element found"))
}

fn open_root(seen_root: bool, e: &BytesStart<'_>) -> Result<Gamelist, GamelistError> {
    if seen_root {
        return Err(GamelistError::invalid_document(
            "more than one root element",
        ));
    }
    Ok(Gamelist {
        root: tag_name(e),
        root_attributes: read_attributes(e)?,
        nodes: Vec::new(),
    })
}

fn push_raw(doc: &mut Option<Gamelist>, raw: &str) {
    if let Some(doc) = doc.as_mut() {
        doc.nodes.push(Node::Raw(raw.trim().to_string()));
    }
}

fn tag_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn read_attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>, GamelistError> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(attributes)
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

fn write_game(xml: &mut String, game: &GameRecord) {
    xml.push_str("  ");
    write_open_tag(xml, tags::GAME, game.attributes());
    xml.push('\n');
    for field in game.fields() {
        write_tag(xml, &field.tag, &field.value);
    }
    xml.push_str("  </game>\n");
}

fn write_open_tag(xml: &mut String, tag: &str, attributes: &[(String, String)]) {
    xml.push('<');
    xml.push_str(tag);
    for (key, value) in attributes {
        xml.push(' ');
        xml.push_str(key);
        xml.push_str("=\"");
        xml.push_str(&escape_xml(value));
        xml.push('"');
    }
    xml.push('>');
}

fn write_tag(xml: &mut String, tag: &str, value: &str) {
    xml.push_str("    <");
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(&escape_xml(value));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
