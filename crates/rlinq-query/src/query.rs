//! The `Query` handle and its chain operators.
//!
//! Every chain call consumes the handle and returns a new one whose cursor type
//! wraps the previous cursor type. Lazy operators never fail; operators that do
//! eager work (single, zip, set operations, ordering) return `Result`.

use rlinq_adapters::set_ops;
use rlinq_adapters::sort::{self, Direction};
use rlinq_adapters::{
    CastCursor, ConcatCursor, MaterializedCursor, SelectCursor, SelectIndexedCursor,
    SelectManyCursor, SingleCursor, SkipCursor, TakeCursor, TakeWhileCursor, WhereCursor,
    ZipCursor,
};
use rlinq_core::cast::CastFrom;
use rlinq_core::cursor::{Cursor, IntoSpan, Span, SpanIter};
use rlinq_core::error::Result;
use rlinq_core::source::{IterCursor, OwnedCursor};
use rlinq_mem::{MaterializeBudget, SharedBuffer};

use crate::context::QueryContext;
use crate::metrics;

/// Iterator returned by `Query::into_iter` and `Query::iter`.
pub type QueryIter<C> = SpanIter<C>;

/// Immutable handle over one span, bound to the context it was built under.
#[derive(Debug, Clone)]
pub struct Query<C> {
    pub(crate) span: Span<C>,
    pub(crate) ctx: QueryContext,
}

/// Start a query over any span-like sequence, under a fresh unbounded context.
pub fn from<S: IntoSpan>(seq: S) -> Query<S::Cursor> {
    QueryContext::default().from(seq)
}

pub fn from_iter<I>(iter: I) -> Query<IterCursor<I>>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    QueryContext::default().from_iter(iter)
}

pub fn from_value<T: Clone>(value: T) -> Query<OwnedCursor<T>> {
    QueryContext::default().from_value(value)
}

pub fn from_span<C: Cursor>(span: Span<C>) -> Query<C> {
    QueryContext::default().from_span(span)
}

impl<C: Cursor> Query<C> {
    pub(crate) fn new(span: Span<C>, ctx: QueryContext) -> Self {
        Self { span, ctx }
    }

    fn then<D: Cursor>(self, build: impl FnOnce(Span<C>) -> Span<D>) -> Query<D> {
        Query::new(build(self.span), self.ctx)
    }

    fn try_then<D: Cursor>(
        self,
        op: &'static str,
        build: impl FnOnce(Span<C>, &MaterializeBudget) -> Result<Span<D>>,
    ) -> Result<Query<D>> {
        match build(self.span, self.ctx.budget()) {
            Ok(span) => Ok(Query::new(span, self.ctx)),
            Err(err) => {
                metrics::emit_failure(op, &err);
                Err(err)
            }
        }
    }

    /// Like `try_then` for operators that store their result, recording the
    /// buffer when the context asks for it.
    fn materialize_with<T: Clone>(
        self,
        op: &'static str,
        build: impl FnOnce(Span<C>, &MaterializeBudget) -> Result<Span<MaterializedCursor<T>>>,
    ) -> Result<Query<MaterializedCursor<T>>> {
        let query = self.try_then(op, build)?;
        query.trace_buffer(op, query.span.begin.buffer());
        Ok(query)
    }

    fn trace_buffer<T>(&self, op: &'static str, buffer: &SharedBuffer<T>) {
        if self.ctx.config().trace_materialization {
            let used = self.ctx.used_bytes();
            metrics::emit_event(op, &metrics::materialized(buffer.len(), buffer.bytes(), used));
        }
    }

    pub fn span(&self) -> &Span<C> {
        &self.span
    }

    pub fn context(&self) -> &QueryContext {
        &self.ctx
    }

    /// Walk a copy of the span without consuming the handle.
    pub fn iter(&self) -> QueryIter<C> {
        self.span.iter()
    }

    // ----- lazy adapters -----

    pub fn where_<F>(self, pred: F) -> Query<WhereCursor<C, F>>
    where
        F: Fn(&C::Item) -> bool,
    {
        self.then(|span| WhereCursor::span(span, pred))
    }

    pub fn select<U, F>(self, func: F) -> Query<SelectCursor<C, F>>
    where
        F: Fn(C::Item) -> U,
    {
        self.then(|span| SelectCursor::span(span, func))
    }

    /// Like `select`, with the zero-based position of each element.
    pub fn select_indexed<U, F>(self, func: F) -> Query<SelectIndexedCursor<C, F>>
    where
        F: Fn(C::Item, usize) -> U,
    {
        self.then(|span| SelectIndexedCursor::span(span, func))
    }

    /// Flatten one level. Elements that produce an empty sequence contribute
    /// nothing.
    pub fn select_many<S, F>(self, func: F) -> Query<SelectManyCursor<C, F, S>>
    where
        S: IntoSpan,
        F: Fn(C::Item) -> S,
    {
        self.then(|span| SelectManyCursor::span(span, func))
    }

    pub fn skip(self, count: usize) -> Query<SkipCursor<C>> {
        self.then(|span| SkipCursor::span(span, count))
    }

    pub fn skip_while<F>(self, pred: F) -> Query<SkipCursor<C>>
    where
        F: Fn(&C::Item) -> bool,
    {
        self.then(|span| SkipCursor::span_while(span, pred))
    }

    pub fn take(self, count: usize) -> Query<TakeCursor<C>> {
        self.then(|span| TakeCursor::span(span, count))
    }

    pub fn take_while<F>(self, pred: F) -> Query<TakeWhileCursor<C, F>>
    where
        F: Fn(&C::Item) -> bool,
    {
        self.then(|span| TakeWhileCursor::span(span, pred))
    }

    pub fn cast<U>(self) -> Query<CastCursor<C, U>>
    where
        U: CastFrom<C::Item>,
    {
        self.then(CastCursor::span)
    }

    pub fn concat<S>(self, other: S) -> Query<ConcatCursor<C, S::Cursor>>
    where
        S: IntoSpan,
        S::Cursor: Cursor<Item = C::Item>,
    {
        self.then(|span| ConcatCursor::span(span, other.into_span()))
    }

    // ----- eager adapters -----

    /// The source as a one-element sequence; fails unless it holds exactly one
    /// element.
    pub fn as_single(self) -> Result<Query<SingleCursor<C>>> {
        self.try_then("single", |span, _| SingleCursor::span(span))
    }

    pub fn as_single_by<F>(self, pred: F) -> Result<Query<SingleCursor<C>>>
    where
        F: Fn(&C::Item) -> bool,
    {
        self.try_then("single", |span, _| SingleCursor::span_by(span, pred))
    }

    /// Pair elements positionally. Both sequences must have the same length.
    pub fn zip<S>(self, other: S) -> Result<Query<ZipCursor<C, S::Cursor>>>
    where
        S: IntoSpan,
        C::Item: Clone,
        <S::Cursor as Cursor>::Item: Clone,
    {
        let query = self.try_then("zip", |span, budget| {
            ZipCursor::span(span, other.into_span(), budget)
        })?;
        query.trace_buffer("zip", query.span.begin.buffer());
        Ok(query)
    }

    #[allow(clippy::type_complexity)]
    pub fn zip_with<S, U, F>(
        self,
        other: S,
        func: F,
    ) -> Result<
        Query<
            SelectCursor<
                ZipCursor<C, S::Cursor>,
                impl Fn((C::Item, <S::Cursor as Cursor>::Item)) -> U,
            >,
        >,
    >
    where
        S: IntoSpan,
        C::Item: Clone,
        <S::Cursor as Cursor>::Item: Clone,
        F: Fn(C::Item, <S::Cursor as Cursor>::Item) -> U,
    {
        Ok(self.zip(other)?.select(move |(a, b)| func(a, b)))
    }

    /// Copy the sequence into a shared buffer.
    pub fn materialize(self) -> Result<Query<MaterializedCursor<C::Item>>>
    where
        C::Item: Clone,
    {
        self.materialize_with("materialize", |span, budget| {
            set_ops::copy(span, budget, "materialize")
        })
    }

    /// Unique elements, ascending.
    pub fn distinct(self) -> Result<Query<MaterializedCursor<C::Item>>>
    where
        C::Item: Ord + Clone,
    {
        self.materialize_with("distinct", |span, budget| set_ops::distinct(span, budget))
    }

    /// Elements not in `other`, each once, in source order.
    pub fn except<S>(self, other: S) -> Result<Query<MaterializedCursor<C::Item>>>
    where
        S: IntoSpan,
        S::Cursor: Cursor<Item = C::Item>,
        C::Item: Ord + Clone,
    {
        self.materialize_with("except", |span, budget| {
            set_ops::except(span, other.into_span(), budget)
        })
    }

    pub fn intersect<S>(self, other: S) -> Result<Query<MaterializedCursor<C::Item>>>
    where
        S: IntoSpan,
        S::Cursor: Cursor<Item = C::Item>,
        C::Item: Ord + Clone,
    {
        self.materialize_with("intersect", |span, budget| {
            set_ops::intersect(span, other.into_span(), budget)
        })
    }

    pub fn union<S>(self, other: S) -> Result<Query<MaterializedCursor<C::Item>>>
    where
        S: IntoSpan,
        S::Cursor: Cursor<Item = C::Item>,
        C::Item: Ord + Clone,
    {
        self.materialize_with("union", |span, budget| {
            set_ops::union(span, other.into_span(), budget)
        })
    }

    pub fn default_if_empty(self) -> Result<Query<MaterializedCursor<C::Item>>>
    where
        C::Item: Default + Clone,
    {
        self.default_if_empty_with(C::Item::default())
    }

    pub fn default_if_empty_with(
        self,
        value: C::Item,
    ) -> Result<Query<MaterializedCursor<C::Item>>>
    where
        C::Item: Clone,
    {
        self.materialize_with("default_if_empty", |span, budget| {
            set_ops::default_if_empty(span, value, budget)
        })
    }

    pub fn reverse(self) -> Result<Query<MaterializedCursor<C::Item>>>
    where
        C::Item: Clone,
    {
        self.materialize_with("reverse", |span, budget| set_ops::reverse(span, budget))
    }

    /// Stable sort by `key`.
    pub fn order_by<K, F>(self, key: F) -> Result<Query<MaterializedCursor<C::Item>>>
    where
        K: Ord,
        F: Fn(&C::Item) -> K,
        C::Item: Clone,
    {
        self.materialize_with("order_by", |span, budget| {
            sort::order_by(span, key, Direction::Ascending, budget)
        })
    }

    /// Groups in descending key order; equal keys keep encounter order.
    pub fn order_by_descending<K, F>(self, key: F) -> Result<Query<MaterializedCursor<C::Item>>>
    where
        K: Ord,
        F: Fn(&C::Item) -> K,
        C::Item: Clone,
    {
        self.materialize_with("order_by", |span, budget| {
            sort::order_by(span, key, Direction::Descending, budget)
        })
    }
}

impl<C: Cursor> IntoIterator for Query<C> {
    type Item = C::Item;
    type IntoIter = QueryIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.span.into_iter()
    }
}

impl<C: Cursor> IntoIterator for &Query<C> {
    type Item = C::Item;
    type IntoIter = QueryIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.span.iter()
    }
}

impl<C: Cursor> IntoSpan for Query<C> {
    type Cursor = C;

    fn into_span(self) -> Span<C> {
        self.span
    }
}
