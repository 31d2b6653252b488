//! Word lists loaded from disk.

use super::common::{ban_everything, word_list_dir, LIST_NAME};
use safecode::{CharacterPool, Config, DirWordSource, Validator, WordSource};

#[test]
fn test_dir_source_loads_and_uppercases() {
    let (dir, _) = word_list_dir("rats\ncheese\n");
    let v = Validator::load(&DirWordSource::new(dir.path()), LIST_NAME);
    assert_eq!(v.len(), 2);
    assert_eq!(v.matchers()[1].word(), "CHEESE");
    assert!(!v.validate("RATSXX"));
}

#[test]
fn test_nonexistent_file_is_permissive() {
    let (dir, _) = word_list_dir("rats\n");
    let source = DirWordSource::new(dir.path());
    assert!(source.load("blacklistTEST.txt").is_err());

    let v = Validator::load(&source, "blacklistTEST.txt");
    assert!(v.is_empty());
    assert!(v.validate("RATSXX"));
}

#[test]
fn test_config_with_restrictive_file() {
    let pool = CharacterPool::default();
    let (_dir, path) = word_list_dir(&ban_everything(&pool));
    let config = Config::new(None, Some(path)).unwrap();
    assert_eq!(config.validator().len(), pool.len());
    assert!(config.generator().generate(3).is_err());
}
