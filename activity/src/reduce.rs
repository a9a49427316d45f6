/// Element with the greatest key. Among equal keys the first one wins.
///
/// Elements with a `NaN` key are never selected.
pub fn first_max_by<T>(items: impl IntoIterator<Item = T>, key: impl Fn(&T) -> f64) -> Option<T> {
    first_by(items, key, |candidate, best| candidate > best)
}

/// Element with the smallest key. Among equal keys the first one wins.
///
/// Elements with a `NaN` key are never selected.
pub fn first_min_by<T>(items: impl IntoIterator<Item = T>, key: impl Fn(&T) -> f64) -> Option<T> {
    first_by(items, key, |candidate, best| candidate < best)
}

fn first_by<T>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> f64,
    replaces: impl Fn(f64, f64) -> bool,
) -> Option<T> {
    items
        .into_iter()
        .fold(None, |best: Option<(T, f64)>, item| {
            let value = key(&item);

            if value.is_nan() {
                return best;
            }

            match best {
                Some((_, best_value)) if !replaces(value, best_value) => best,
                _ => Some((item, value)),
            }
        })
        .map(|(item, _)| item)
}
