//! 文件创建操作的宿主机测试
//!
//! 用 test-support 的 Mock 协作者搭出一个挂载会话，覆盖
//! 快速路径、扩容重试、空间耗尽与部分失败等路径。

use std::sync::Arc;

use ext2::{DirentKind, Ext2Volume, MountSession, VolumeError, op_create};
use test_support::mock::{MockBridgeOps, MockOpener, MockResolver, MockVolume};
use uapi::cred::Credentials;
use uapi::time::TimeSpec;
use vfs::{FileHandle, FileMode, FsError};

/// ext2 根目录的固定 inode 号
const ROOT: u32 = 2;
/// 测试用的"当前时间"
const NOW: i64 = 1_700_000_000;

struct Fixture {
    volume: Arc<MockVolume>,
    opener: Arc<MockOpener>,
    session: MountSession,
}

fn fixture_with(cred: Option<Credentials>, total_inodes: u32, root_capacity: usize) -> Fixture {
    let volume = Arc::new(MockVolume::new(total_inodes));
    volume.add_dir(ROOT, root_capacity);

    let resolver = Arc::new(MockResolver::new(volume.clone()));
    resolver.insert("/", ROOT);

    let opener = Arc::new(MockOpener::new(volume.clone(), resolver.clone()));
    let ops = Arc::new(MockBridgeOps::new(TimeSpec::from_secs(NOW), cred));

    let session = MountSession::new(volume.clone(), resolver, opener.clone(), ops);
    Fixture {
        volume,
        opener,
        session,
    }
}

fn fixture() -> Fixture {
    fixture_with(
        Some(Credentials {
            uid: 1000,
            gid: 100,
        }),
        64,
        8,
    )
}

fn reg_mode() -> FileMode {
    FileMode::from_bits_truncate(0o100644)
}

#[test]
fn test_create_success_initializes_record() {
    let f = fixture();
    let mut handle = FileHandle::default();

    let result = f.session.create("/hello.txt", reg_mode(), &mut handle);
    assert!(result.is_ok());

    // 目录项已写入且类型标签为普通文件
    let entries = f.volume.entries(ROOT);
    assert_eq!(entries.len(), 1);
    let (name, ino, kind) = &entries[0];
    assert_eq!(name, "hello.txt");
    assert_eq!(*kind, DirentKind::Regular);

    // 句柄由收尾 open 填充
    assert_eq!(handle.fh, u64::from(*ino));

    // 记录完整初始化：链接数 1、大小 0、三个时间戳一致
    let record = f.volume.record(*ino).unwrap();
    assert_eq!(record.links_count, 1);
    assert_eq!(record.size, 0);
    assert_eq!(u32::from(record.mode), 0o100644);
    assert_eq!(record.atime, NOW as u32);
    assert_eq!(record.ctime, NOW as u32);
    assert_eq!(record.mtime, NOW as u32);
    assert_eq!(record.uid, 1000);
    assert_eq!(record.gid, 100);

    // 位图已标记
    assert_eq!(f.volume.stats().used_inodes(), 2); // 根目录 + 新文件
}

#[test]
fn test_create_twice_is_idempotent() {
    let f = fixture();
    let mut handle = FileHandle::default();

    assert!(f.session.create("/a.txt", reg_mode(), &mut handle).is_ok());
    let stats_after_first = f.volume.stats();
    let allocs_after_first = f.volume.new_inode_count();

    // 第二次走快速路径：成功但不再分配
    let mut handle2 = FileHandle::default();
    assert!(f.session.create("/a.txt", reg_mode(), &mut handle2).is_ok());

    assert_eq!(f.volume.new_inode_count(), allocs_after_first);
    assert_eq!(f.volume.stats(), stats_after_first);
    assert_eq!(f.volume.entries(ROOT).len(), 1);
    assert_eq!(handle2.fh, handle.fh);
}

#[test]
fn test_create_without_caller_cred_defaults_to_root() {
    let f = fixture_with(None, 64, 8);
    let mut handle = FileHandle::default();

    assert!(f.session.create("/b.txt", reg_mode(), &mut handle).is_ok());

    let entries = f.volume.entries(ROOT);
    let record = f.volume.record(entries[0].1).unwrap();
    assert_eq!(record.uid, 0);
    assert_eq!(record.gid, 0);
}

#[test]
fn test_create_expands_full_directory() {
    // 容量为 0 的根目录：第一次插入必然返回"目录已满"
    let f = fixture_with(None, 64, 0);
    let mut handle = FileHandle::default();

    assert!(f.session.create("/c.txt", reg_mode(), &mut handle).is_ok());

    assert!(f.volume.expand_count() >= 1);
    let entries = f.volume.entries(ROOT);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "c.txt");
}

#[test]
fn test_create_expansion_failure_is_enospc() {
    let f = fixture_with(None, 64, 0);
    f.volume.set_expansions_left(0);
    let mut handle = FileHandle::default();

    let result = f.session.create("/d.txt", reg_mode(), &mut handle);
    assert_eq!(result, Err(FsError::NoSpace));

    // 父目录保持原样
    assert!(f.volume.entries(ROOT).is_empty());
}

#[test]
fn test_create_expansion_without_growth_aborts() {
    // 扩容声称成功但目录大小不增长：进度检查必须终止循环
    let f = fixture_with(None, 64, 0);
    f.volume.freeze_size_on_expand();
    let mut handle = FileHandle::default();

    let result = f.session.create("/e.txt", reg_mode(), &mut handle);
    assert_eq!(result, Err(FsError::IoError));
    assert_eq!(f.volume.expand_count(), 1);
}

#[test]
fn test_create_allocator_exhaustion_is_enospc() {
    // 只有根目录占用的 inode，分配器无号可发
    let f = fixture_with(None, 2, 8);
    let mut handle = FileHandle::default();

    let result = f.session.create("/f.txt", reg_mode(), &mut handle);
    assert_eq!(result, Err(FsError::NoSpace));

    assert!(f.volume.entries(ROOT).is_empty());
    assert_eq!(f.volume.stats().used_inodes(), 1);
}

#[test]
fn test_create_allocator_io_error_is_eio() {
    // 非耗尽的分配器失败不得伪装成空间不足
    let f = fixture_with(None, 64, 8);
    f.volume.inject_new_inode_error(VolumeError::Io);
    let mut handle = FileHandle::default();

    let result = f.session.create("/x.txt", reg_mode(), &mut handle);
    assert_eq!(result, Err(FsError::IoError));
    assert!(f.volume.entries(ROOT).is_empty());
}

#[test]
fn test_create_link_io_error() {
    let f = fixture_with(None, 64, 8);
    f.volume.inject_link_error(VolumeError::Io);
    let mut handle = FileHandle::default();

    let result = f.session.create("/g.txt", reg_mode(), &mut handle);
    assert_eq!(result, Err(FsError::IoError));
}

#[test]
fn test_create_malformed_path() {
    let f = fixture();
    let mut handle = FileHandle::default();

    assert_eq!(
        f.session.create("noslash", reg_mode(), &mut handle),
        Err(FsError::NotFound)
    );
    assert_eq!(
        f.session.create("/dir/", reg_mode(), &mut handle),
        Err(FsError::InvalidArgument)
    );
}

#[test]
fn test_create_missing_parent_propagates_resolution_error() {
    let f = fixture();
    let mut handle = FileHandle::default();

    let result = f.session.create("/nodir/file.txt", reg_mode(), &mut handle);
    assert_eq!(result, Err(FsError::NotFound));
    assert!(f.volume.entries(ROOT).is_empty());
}

#[test]
fn test_create_tolerates_stale_bitmap_mark() {
    // 分配器交出的号已在位图中：记录异常但继续覆盖写
    let f = fixture();
    f.volume.force_next_ino(30);
    f.volume.mark_in_use(30);
    let mut handle = FileHandle::default();

    assert!(f.session.create("/h.txt", reg_mode(), &mut handle).is_ok());

    let record = f.volume.record(30).unwrap();
    assert_eq!(record.links_count, 1);
}

#[test]
fn test_create_handoff_failure_leaves_file_on_disk() {
    let f = fixture();
    f.opener.force_error(FsError::IoError);
    let mut handle = FileHandle::default();

    let result = f.session.create("/i.txt", reg_mode(), &mut handle);
    assert_eq!(result, Err(FsError::IoError));

    // 磁盘上创建已完成，只有句柄填充失败
    let entries = f.volume.entries(ROOT);
    assert_eq!(entries.len(), 1);
    assert!(f.volume.record(entries[0].1).is_some());
}

#[test]
fn test_op_create_status_codes() {
    let f = fixture();
    let mut handle = FileHandle::default();

    assert_eq!(op_create(&f.session, "/j.txt", 0o100644, &mut handle), 0);
    assert_eq!(op_create(&f.session, "noslash", 0o100644, &mut handle), -2);

    let exhausted = fixture_with(None, 2, 8);
    let mut handle2 = FileHandle::default();
    assert_eq!(
        op_create(&exhausted.session, "/k.txt", 0o100644, &mut handle2),
        -28
    );
}
