use super::{Profile, Repo};

/// Compute the derived repository statistics and store them on `profile`.
///
/// Totals are always set, even for an empty slice. The average is set only when
/// there is at least one repository; otherwise it is cleared. Calling this again
/// with the same inputs produces the same values.
#[expect(clippy::cast_precision_loss, reason = "star counts are far below 2^52")]
pub fn attach_stats(profile: &mut Profile, repos: &[Repo]) {
    let total_stars: u64 = repos.iter().map(|r| r.stargazers_count).sum();
    let total_forks: u64 = repos.iter().map(|r| r.forks_count).sum();

    profile.total_stars = Some(total_stars);
    profile.total_forks = Some(total_forks);
    profile.avg_stars_per_repo = if repos.is_empty() {
        None
    } else {
        Some(total_stars as f64 / repos.len() as f64)
    };
}
