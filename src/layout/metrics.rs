//! Column/line measurement over the token stream, used by the wrap-decision
//! pass to decide whether a node needs breaking.

use crate::layout::boundary::NodeBoundary;
use crate::token_stream::part::Handle;
use crate::token_stream::token_list::TokenList;

fn visual_width(value: &str, tab_width: usize) -> usize {
    value
        .chars()
        .map(|c| if c == '\t' { tab_width } else { 1 })
        .sum()
}

/// Whether `a` and `b` are separated by no `LineBreak` part, in either
/// stream order.
pub fn is_same_line(list: &TokenList, a: Handle, b: Handle) -> bool {
    if a == b {
        return true;
    }
    let mut cur = list.next(a);
    while let Some(h) = cur {
        if h == b {
            return true;
        }
        if list.is_line_break(h) {
            break;
        }
        cur = list.next(h);
    }
    let mut cur = list.next(b);
    while let Some(h) = cur {
        if h == a {
            return true;
        }
        if list.is_line_break(h) {
            return false;
        }
        cur = list.next(h);
    }
    false
}

pub fn is_multi_line(list: &TokenList, boundary: NodeBoundary) -> bool {
    !is_same_line(list, boundary.first, boundary.last)
}

/// Tab-expanded column count of the stream between `from` and `to`,
/// inclusive of both ends.
pub fn get_length(list: &TokenList, from: Handle, to: Handle, tab_width: usize) -> usize {
    let mut length = 0;
    let mut cur = Some(from);
    while let Some(h) = cur {
        if let Some(part) = list.get(h) {
            length += visual_width(part.value(), tab_width);
        }
        if h == to {
            break;
        }
        cur = list.next(h);
    }
    length
}

/// Tab-expanded column count of the whole line containing `handle`.
pub fn get_line_length(list: &TokenList, handle: Handle, tab_width: usize) -> usize {
    let mut line_start = handle;
    while let Some(prev) = list.previous(line_start) {
        if list.is_line_break(prev) {
            break;
        }
        line_start = prev;
    }

    let mut length = 0;
    let mut cur = Some(line_start);
    while let Some(h) = cur {
        if list.is_line_break(h) {
            break;
        }
        if let Some(part) = list.get(h) {
            length += visual_width(part.value(), tab_width);
        }
        cur = list.next(h);
    }
    length
}

pub fn is_line_too_long(list: &TokenList, handle: Handle, tab_width: usize, max_line_length: usize) -> bool {
    get_line_length(list, handle, tab_width) > max_line_length
}
