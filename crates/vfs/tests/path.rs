use vfs::{FsError, split_path};

#[test]
fn test_split_path_nested() {
    assert_eq!(
        split_path("/foo/bar.txt").unwrap(),
        ("/foo".to_string(), "bar.txt".to_string())
    );
    assert_eq!(
        split_path("/a/b/c").unwrap(),
        ("/a/b".to_string(), "c".to_string())
    );
}

#[test]
fn test_split_path_root_leaf() {
    assert_eq!(
        split_path("/hello").unwrap(),
        ("/".to_string(), "hello".to_string())
    );
}

#[test]
fn test_split_path_no_separator() {
    assert!(matches!(split_path("hello.txt"), Err(FsError::NotFound)));
    assert!(matches!(split_path(""), Err(FsError::NotFound)));
}

#[test]
fn test_split_path_trailing_slash() {
    assert!(matches!(
        split_path("/foo/bar/"),
        Err(FsError::InvalidArgument)
    ));
}

#[test]
fn test_split_path_root_only() {
    // "/" 以分隔符结尾但长度为 1，落入空名字分支
    assert!(matches!(split_path("/"), Err(FsError::InvalidArgument)));
}

#[test]
fn test_split_path_no_normalization() {
    // 只在最后一个分隔符处拆分，不做多余斜杠合并
    assert_eq!(
        split_path("/foo//bar.txt").unwrap(),
        ("/foo/".to_string(), "bar.txt".to_string())
    );
}
