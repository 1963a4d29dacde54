//! Mansion map loader.
//!
//! Maps are plain text, one record per line:
//!
//! ```text
//! 36 24 Doctor Lucky's Mansion      rows cols mansion-name
//! 50 Doctor Lucky                   health target-name
//! Fortune the Cat                   pet name
//! 21                                room count N
//! 22 19 23 26 Armory                N lines: r1 c1 r2 c2 room-name
//! ...
//! 20                                item count M
//! 8 3 Crepe Pan                     M lines: room-index damage item-name
//! ...
//! ```
//!
//! Names may contain spaces; runs of whitespace inside a name collapse to a
//! single space. Errors carry the 1-based line number they were found on.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, bail};
use game_core::{ItemSpec, MapDimensions, Rect, RoomSpec, TargetSpec, WorldSpec};

use crate::loaders::{LoadResult, read_file};

/// Loader for mansion maps in the text format above.
pub struct MapLoader;

impl MapLoader {
    /// Load a map file.
    pub fn load(path: &Path) -> LoadResult<WorldSpec> {
        let content = read_file(path)?;
        let spec = Self::parse(&content)
            .with_context(|| format!("Failed to parse map {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            mansion = %spec.name,
            rooms = spec.rooms.len(),
            items = spec.items.len(),
            "loaded map"
        );
        Ok(spec)
    }

    /// Parse map text.
    pub fn parse(content: &str) -> LoadResult<WorldSpec> {
        let mut lines = Lines::new(content);

        let (line_no, header) = lines.next_record("mansion header")?;
        let tokens = Tokens::new(line_no, header);
        let rows = tokens.number(0, "row count")?;
        let cols = tokens.number(1, "column count")?;
        let name = tokens.name_from(2, "mansion name")?;

        let (line_no, line) = lines.next_record("target line")?;
        let tokens = Tokens::new(line_no, line);
        let health = tokens.number(0, "target health")?;
        let target_name = tokens.name_from(1, "target name")?;

        let (_, pet_name) = lines.next_record("pet name")?;

        let room_count = lines.count("room count")?;
        let mut rooms = Vec::with_capacity(room_count);
        for _ in 0..room_count {
            let (line_no, line) = lines.next_record("room line")?;
            let tokens = Tokens::new(line_no, line);
            let rect = Rect::new(
                tokens.number(0, "upper row")?,
                tokens.number(1, "upper column")?,
                tokens.number(2, "lower row")?,
                tokens.number(3, "lower column")?,
            );
            rooms.push(RoomSpec {
                name: tokens.name_from(4, "room name")?,
                rect,
            });
        }

        let item_count = lines.count("item count")?;
        let mut items = Vec::with_capacity(item_count);
        for _ in 0..item_count {
            let (line_no, line) = lines.next_record("item line")?;
            let tokens = Tokens::new(line_no, line);
            items.push(ItemSpec {
                room: tokens.number(0, "item room index")?,
                damage: tokens.number(1, "item damage")?,
                name: tokens.name_from(2, "item name")?,
            });
        }

        if let Some(line_no) = lines.trailing() {
            tracing::warn!(line = line_no, "ignoring content after the item list");
        }

        Ok(WorldSpec {
            name,
            dimensions: MapDimensions::new(rows, cols),
            target: TargetSpec {
                name: target_name,
                health,
                start: 0,
            },
            pet_name: pet_name.to_string(),
            rooms,
            items,
        })
    }
}

/// Line cursor that keeps track of 1-based line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            inner: content.lines().enumerate(),
        }
    }

    fn next_record(&mut self, what: &str) -> LoadResult<(usize, &'a str)> {
        match self.inner.next() {
            Some((index, line)) if !line.trim().is_empty() => Ok((index + 1, line.trim())),
            Some((index, _)) => bail!("line {}: expected {}, found an empty line", index + 1, what),
            None => bail!("unexpected end of file, expected {}", what),
        }
    }

    fn count(&mut self, what: &str) -> LoadResult<usize> {
        let (line_no, line) = self.next_record(what)?;
        Tokens::new(line_no, line).number(0, what)
    }

    /// Line number of the first non-blank line left, if any.
    fn trailing(&mut self) -> Option<usize> {
        self.inner
            .find(|(_, line)| !line.trim().is_empty())
            .map(|(index, _)| index + 1)
    }
}

/// Whitespace-separated fields of one line.
struct Tokens<'a> {
    line_no: usize,
    fields: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    fn new(line_no: usize, line: &'a str) -> Self {
        Self {
            line_no,
            fields: line.split_whitespace().collect(),
        }
    }

    fn number<T>(&self, position: usize, what: &str) -> LoadResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let Some(field) = self.fields.get(position) else {
            bail!("line {}: missing {}", self.line_no, what);
        };
        field.parse().map_err(|e| {
            anyhow::anyhow!("line {}: invalid {} '{}': {}", self.line_no, what, field, e)
        })
    }

    /// Every field from `position` on, joined by single spaces.
    fn name_from(&self, position: usize, what: &str) -> LoadResult<String> {
        match self.fields.get(position..) {
            Some(rest) if !rest.is_empty() => Ok(rest.join(" ")),
            _ => bail!("line {}: missing {}", self.line_no, what),
        }
    }
}
