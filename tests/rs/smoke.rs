//! Integration smoke tests for `zettel_viz`

use zettel_viz::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
