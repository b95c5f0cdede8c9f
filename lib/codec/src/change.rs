use crate::{parse, serialize, CodecError, CodecResult};
use rdf_transform_model::Transform;
use std::io::{BufRead, Write};

const END_OF_CHANGE: &str = "/ec/";

/// An undoable replacement of the transform stored for a project.
///
/// The change is persisted as one line per side followed by an end marker:
///
/// ```text
/// new=<template JSON, or nothing>
/// old=<template JSON, or nothing>
/// /ec/
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformChange {
    current: Option<Transform>,
    previous: Option<Transform>,
}

impl TransformChange {
    pub fn new(current: Option<Transform>, previous: Option<Transform>) -> Self {
        Self { current, previous }
    }

    pub fn current(&self) -> Option<&Transform> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&Transform> {
        self.previous.as_ref()
    }

    /// Stores the current transform in `slot`, remembering what was there before.
    pub fn apply(&mut self, slot: &mut Option<Transform>) {
        self.previous = slot.take();
        slot.clone_from(&self.current);
    }

    /// Restores the transform `slot` held before [TransformChange::apply]. If it held none, the
    /// slot is cleared.
    pub fn revert(&self, slot: &mut Option<Transform>) {
        slot.clone_from(&self.previous);
    }

    /// Writes the change record. Nothing is written if either side fails to serialize.
    pub fn write<W: Write>(&self, writer: &mut W) -> CodecResult<()> {
        let current = self.current.as_ref().map(serialize).transpose()?;
        let previous = self.previous.as_ref().map(serialize).transpose()?;
        writer.write_all(b"new=")?;
        if let Some(current) = current {
            writer.write_all(current.as_bytes())?;
        }
        writer.write_all(b"\nold=")?;
        if let Some(previous) = previous {
            writer.write_all(previous.as_bytes())?;
        }
        writer.write_all(b"\n")?;
        writer.write_all(END_OF_CHANGE.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Reads a change written by [TransformChange::write].
    ///
    /// Reading stops after the end marker, so several changes can share one reader. Unknown
    /// fields are ignored.
    pub fn read<R: BufRead>(reader: R) -> CodecResult<Self> {
        let mut change = Self::default();
        for line in reader.lines() {
            let line = line?;
            if line == END_OF_CHANGE {
                break;
            }
            let (field, value) = line
                .split_once('=')
                .ok_or_else(|| CodecError::MalformedChange(format!("no '=' in line '{line}'")))?;
            let transform = if value.is_empty() {
                None
            } else {
                Some(parse(value)?)
            };
            match field {
                "new" => change.current = transform,
                "old" => change.previous = transform,
                _ => {}
            }
        }
        Ok(change)
    }
}
