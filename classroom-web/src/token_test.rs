//! Browser tests for the `localStorage` token backend.

#[cfg(test)]
mod tests {
    use crate::token::{LocalTokenStore, TokenStore, TokenVault};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_store_keeps_raw_token() {
        let store = LocalTokenStore::new("classroom-test-raw");
        store.write("abc.def.ghi").unwrap();

        assert_eq!(store.read().unwrap().as_deref(), Some("abc.def.ghi"));

        store.clear().unwrap();
        assert_eq!(store.read().unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn vault_hydrates_from_previous_page_load() {
        LocalTokenStore::new("classroom-test-vault")
            .write("persisted")
            .unwrap();

        let vault = TokenVault::new(LocalTokenStore::new("classroom-test-vault"));
        assert_eq!(vault.current(), None);
        assert_eq!(vault.hydrate().as_deref(), Some("persisted"));
        assert!(vault.is_set());

        vault.clear();
        assert_eq!(
            LocalTokenStore::new("classroom-test-vault").read().unwrap(),
            None
        );
    }
}
