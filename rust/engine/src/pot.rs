/// Divides `pot` evenly among `winners`.
///
/// `winners` must already be ordered by seat starting left of the button. Chips
/// that do not divide evenly go one at a time to the earliest winners in that
/// order. Returns `(seat, amount)` pairs in the same order; the amounts always
/// sum to `pot`.
///
/// ```
/// use holdem_engine::pot::split_pot;
///
/// assert_eq!(split_pot(101, &[4, 1]), vec![(4, 51), (1, 50)]);
/// ```
pub fn split_pot(pot: u32, winners: &[usize]) -> Vec<(usize, u32)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u32;
    let share = pot / n;
    let odd = (pot % n) as usize;
    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| (seat, share + u32::from(i < odd)))
        .collect()
}
