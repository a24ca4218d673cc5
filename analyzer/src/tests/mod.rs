#[cfg(test)]
mod common;
#[cfg(test)]
mod test_edits;
#[cfg(test)]
mod test_indent;
#[cfg(test)]
mod test_invariants;
