//! Board projection and drag-and-drop move reconciliation.
//!
//! A [`BoardState`] is a derived view of a flat task list: one ordered card
//! sequence per [`TaskStatus`] column. It is rebuilt wholesale from the store
//! whenever the task list changes and is only ever advanced locally by
//! [`BoardState::reconcile_move`], which returns the optimistic board along
//! with the pending writes the caller persists.

use super::{BoardError, Position, PositionPolicy, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// The slice of a task the reconciler reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCard {
    id: TaskId,
    status: TaskStatus,
    position: Position,
}

impl BoardCard {
    /// Creates a card.
    #[must_use]
    pub const fn new(id: TaskId, status: TaskStatus, position: Position) -> Self {
        Self {
            id,
            status,
            position,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the card's column.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the card's ordering key.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    fn pending(&self) -> PendingUpdate {
        PendingUpdate {
            id: self.id.clone(),
            status: self.status,
            position: self.position,
        }
    }
}

/// Loosely typed task row as returned by the backing store.
///
/// Rows are decoded without validating `status`, so a row carrying a status
/// the board does not know can be dropped on its own instead of failing the
/// whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    /// Raw task identifier.
    pub id: String,
    /// Raw status value.
    pub status: String,
    /// Stored ordering key.
    pub position: u64,
}

/// One drag-and-drop gesture, as reported by the drag source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragMove {
    /// Column the card was lifted from.
    pub source: TaskStatus,
    /// Index of the card within the source column.
    pub source_index: usize,
    /// Column the card was dropped into.
    pub destination: TaskStatus,
    /// Insertion index within the destination column, counted after the
    /// card has been lifted out.
    pub destination_index: usize,
}

impl DragMove {
    /// Creates a move between two columns.
    #[must_use]
    pub const fn new(
        source: TaskStatus,
        source_index: usize,
        destination: TaskStatus,
        destination_index: usize,
    ) -> Self {
        Self {
            source,
            source_index,
            destination,
            destination_index,
        }
    }

    /// Creates a reorder within a single column.
    #[must_use]
    pub const fn within(column: TaskStatus, from: usize, to: usize) -> Self {
        Self::new(column, from, column, to)
    }

    /// Returns `true` when source and destination columns are the same.
    #[must_use]
    pub fn is_same_column(&self) -> bool {
        self.source == self.destination
    }

    /// Returns `true` when the card is dropped back where it started.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.is_same_column() && self.source_index == self.destination_index
    }
}

/// A row write the caller must persist after a move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingUpdate {
    /// Task to update.
    pub id: TaskId,
    /// New column.
    pub status: TaskStatus,
    /// New ordering key.
    pub position: Position,
}

/// Result of reconciling one move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    state: BoardState,
    updates: Vec<PendingUpdate>,
}

impl MoveOutcome {
    fn unchanged(state: BoardState) -> Self {
        Self {
            state,
            updates: Vec::new(),
        }
    }

    /// Board to render immediately.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Writes to persist, moved card first.
    #[must_use]
    pub fn updates(&self) -> &[PendingUpdate] {
        &self.updates
    }

    /// Splits the outcome into the new board and its pending writes.
    #[must_use]
    pub fn into_parts(self) -> (BoardState, Vec<PendingUpdate>) {
        (self.state, self.updates)
    }
}

/// Per-column ordered projection of a task list.
///
/// Serialises as a map from column to cards. Decoding re-projects the cards,
/// so each card lands in the column named by its own status and columns come
/// back sorted by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<TaskStatus, Vec<BoardCard>>",
    into = "BTreeMap<TaskStatus, Vec<BoardCard>>"
)]
pub struct BoardState {
    columns: BTreeMap<TaskStatus, Vec<BoardCard>>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            columns: TaskStatus::ALL
                .into_iter()
                .map(|status| (status, Vec::new()))
                .collect(),
        }
    }
}

impl From<BTreeMap<TaskStatus, Vec<BoardCard>>> for BoardState {
    fn from(columns: BTreeMap<TaskStatus, Vec<BoardCard>>) -> Self {
        Self::project(columns.into_values().flatten())
    }
}

impl From<BoardState> for BTreeMap<TaskStatus, Vec<BoardCard>> {
    fn from(board: BoardState) -> Self {
        board.columns
    }
}

impl BoardState {
    /// Creates a board with every column empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Partitions cards into columns and sorts each column by position.
    ///
    /// Sorting is stable, so cards sharing a position keep their input order.
    #[must_use]
    pub fn project(cards: impl IntoIterator<Item = BoardCard>) -> Self {
        let mut board = Self::default();
        for card in cards {
            board.columns.entry(card.status).or_default().push(card);
        }
        for cards in board.columns.values_mut() {
            cards.sort_by_key(BoardCard::position);
        }
        debug!(tasks = board.task_count(), "projected task board");
        board
    }

    /// Projects raw store rows, dropping rows the board cannot place.
    #[must_use]
    pub fn project_rows(rows: impl IntoIterator<Item = TaskRow>) -> Self {
        let cards = rows.into_iter().filter_map(|row| {
            let status = match TaskStatus::try_from(row.status.as_str()) {
                Ok(status) => status,
                Err(err) => {
                    warn!(task_id = %row.id, error = %err, "dropping task row from board");
                    return None;
                }
            };
            match TaskId::new(row.id) {
                Ok(id) => Some(BoardCard::new(id, status, Position::new(row.position))),
                Err(err) => {
                    warn!(error = %err, "dropping task row from board");
                    None
                }
            }
        });
        Self::project(cards)
    }

    /// Returns the cards in a column in board order.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[BoardCard] {
        self.columns
            .get(&status)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates over columns in board order.
    pub fn columns(&self) -> impl Iterator<Item = (TaskStatus, &[BoardCard])> {
        self.columns
            .iter()
            .map(|(status, cards)| (*status, cards.as_slice()))
    }

    /// Total number of cards across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Returns `true` when no column holds a card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.values().all(Vec::is_empty)
    }

    /// Locates a card by task identifier.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<(TaskStatus, usize)> {
        self.columns.iter().find_map(|(status, cards)| {
            cards
                .iter()
                .position(|card| card.id() == id)
                .map(|index| (*status, index))
        })
    }

    /// Flattens the board into a single list, columns in board order.
    #[must_use]
    pub fn flatten(&self) -> Vec<BoardCard> {
        self.columns.values().flatten().cloned().collect()
    }

    /// Applies a drag-and-drop move and computes the writes it implies.
    ///
    /// The destination column is renumbered with `policy`; for moves across
    /// columns the source column is renumbered too. An update is emitted for
    /// exactly those cards whose status or position changed, the moved card
    /// first. Dropping a card back onto its own slot yields no updates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SourceIndexOutOfRange`] or
    /// [`BoardError::DestinationIndexOutOfRange`] when the move does not fit
    /// this board. `self` is left untouched.
    pub fn reconcile_move(
        &self,
        movement: DragMove,
        policy: &PositionPolicy,
    ) -> Result<MoveOutcome, BoardError> {
        let source_len = self.column(movement.source).len();
        if movement.source_index >= source_len {
            return Err(BoardError::SourceIndexOutOfRange {
                column: movement.source,
                index: movement.source_index,
                len: source_len,
            });
        }

        let destination_len = if movement.is_same_column() {
            source_len.saturating_sub(1)
        } else {
            self.column(movement.destination).len()
        };
        if movement.destination_index > destination_len {
            return Err(BoardError::DestinationIndexOutOfRange {
                column: movement.destination,
                index: movement.destination_index,
                len: destination_len,
            });
        }

        if movement.is_noop() {
            return Ok(MoveOutcome::unchanged(self.clone()));
        }

        let mut columns = self.columns.clone();
        let mut moved = columns
            .entry(movement.source)
            .or_default()
            .remove(movement.source_index);
        let prior_status = moved.status;
        let prior_position = moved.position;
        moved.status = movement.destination;
        let moved_id = moved.id.clone();
        columns
            .entry(movement.destination)
            .or_default()
            .insert(movement.destination_index, moved);

        let mut updates = Vec::new();
        let destination_updates = renumber(
            columns.entry(movement.destination).or_default(),
            policy,
            &moved_id,
        );
        let moved_position = policy.position_for(movement.destination_index);
        if prior_status != movement.destination || prior_position != moved_position {
            updates.push(PendingUpdate {
                id: moved_id.clone(),
                status: movement.destination,
                position: moved_position,
            });
        }
        updates.extend(destination_updates);

        if !movement.is_same_column() {
            updates.extend(renumber(
                columns.entry(movement.source).or_default(),
                policy,
                &moved_id,
            ));
        }

        debug!(
            task_id = %moved_id,
            from = %movement.source,
            to = %movement.destination,
            updates = updates.len(),
            "reconciled board move"
        );
        Ok(MoveOutcome {
            state: Self { columns },
            updates,
        })
    }

    /// Applies a move, or logs and keeps the current board when the move
    /// does not fit it.
    #[must_use]
    pub fn reconcile_move_or_keep(
        self,
        movement: DragMove,
        policy: &PositionPolicy,
    ) -> MoveOutcome {
        match self.reconcile_move(movement, policy) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, ?movement, "discarding board move");
                MoveOutcome::unchanged(self)
            }
        }
    }
}

/// Renumbers a column in place and returns updates for every card other than
/// `skip` whose position changed.
fn renumber(
    cards: &mut [BoardCard],
    policy: &PositionPolicy,
    skip: &TaskId,
) -> Vec<PendingUpdate> {
    let mut updates = Vec::new();
    for (index, card) in cards.iter_mut().enumerate() {
        let position = policy.position_for(index);
        let changed = card.position != position;
        card.position = position;
        if changed && card.id != *skip {
            updates.push(card.pending());
        }
    }
    updates
}
