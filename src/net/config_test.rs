use super::*;

fn config() -> StoreConfig {
    StoreConfig {
        base_url: "https://store.example.co".to_owned(),
        anon_key: "anon".to_owned(),
    }
}

#[test]
fn table_url_targets_rest_surface() {
    assert_eq!(config().table_url("rides"), "https://store.example.co/rest/v1/rides");
}

#[test]
fn auth_url_targets_auth_surface() {
    assert_eq!(
        config().auth_url("token?grant_type=password"),
        "https://store.example.co/auth/v1/token?grant_type=password"
    );
}
