#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &[u8])| {
    let (path, resource) = data;
    assert_eq!(jsonprops::tokenize(path).to_string(), path);
    if let Ok(mut resource) = serde_json::from_slice::<serde_json::Value>(resource) {
        let before = resource.clone();
        let _ = jsonprops::has(&resource, path);
        assert_eq!(resource, before);
        for listed in jsonprops::list(&resource) {
            assert_eq!(jsonprops::tokenize(&listed).to_string(), listed);
        }
        if jsonprops::try_set(&mut resource, path, serde_json::Value::Null).is_err() {
            assert_eq!(resource, before);
        }
    }
});
