mod common;

use common::{create_test_project, listing, populate_old_server, setup_test_env, snapshot};
use htdocs_keeper_lib::core::backup;
use htdocs_keeper_lib::models::error::AppError;

#[test]
fn test_backup_copies_whole_server_root() {
    let (_tmp, root) = setup_test_env();
    let server = root.join("htdocs");
    let backups = root.join("backups");
    populate_old_server(&server);

    let record = backup::create_backup(&server, &backups).expect("Backup failed");

    assert!(record.name.starts_with("backup_"));
    assert_eq!(record.path, backups.join(&record.name));
    assert_eq!(record.entries, 2);
    assert_eq!(snapshot(&record.path), snapshot(&server));
}

#[test]
fn test_backups_in_same_second_do_not_collide() {
    let (_tmp, root) = setup_test_env();
    let server = root.join("htdocs");
    let backups = root.join("backups");
    populate_old_server(&server);

    let first = backup::create_backup(&server, &backups).unwrap();
    let second = backup::create_backup(&server, &backups).unwrap();

    assert_ne!(first.name, second.name);
    assert_eq!(backup::list_backups(&backups).unwrap().len(), 2);
}

#[test]
fn test_list_backups_newest_first_and_ignores_strays() {
    let (_tmp, root) = setup_test_env();
    let backups = root.join("backups");
    for name in ["backup_2024-01-01_10-00-00", "backup_2024-03-01_09-30-00", "notes"] {
        std::fs::create_dir_all(backups.join(name)).unwrap();
    }

    let names: Vec<String> = backup::list_backups(&backups)
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();

    assert_eq!(names, vec!["backup_2024-03-01_09-30-00", "backup_2024-01-01_10-00-00"]);
}

#[test]
fn test_list_backups_without_root_is_empty() {
    let (_tmp, root) = setup_test_env();
    assert!(backup::list_backups(&root.join("backups")).unwrap().is_empty());
}

#[test]
fn test_restore_mirrors_snapshot_back() {
    let (_tmp, root) = setup_test_env();
    let server = root.join("htdocs");
    let backups = root.join("backups");
    populate_old_server(&server);
    let before = snapshot(&server);
    let record = backup::create_backup(&server, &backups).unwrap();

    // Overwrite the server root with a project, then roll back.
    create_test_project(&root.join("project"));
    htdocs_keeper_lib::core::deployment::deploy(&root.join("project"), &server).unwrap();
    assert_eq!(listing(&server), vec!["a.txt", "sub"]);

    backup::restore_backup(&backups, &record.name, &server).unwrap();
    assert_eq!(snapshot(&server), before);
}

#[test]
fn test_restore_unknown_backup_fails() {
    let (_tmp, root) = setup_test_env();
    let err = backup::restore_backup(&root.join("backups"), "backup_nope", &root.join("htdocs"))
        .unwrap_err();
    assert!(matches!(err, AppError::DirectoryNotFound(_)));
}

#[test]
fn test_backup_root_inside_server_is_refused() {
    let (_tmp, root) = setup_test_env();
    let server = root.join("htdocs");
    populate_old_server(&server);

    let err = backup::create_backup(&server, &server.join("backups")).unwrap_err();
    assert!(matches!(err, AppError::OverlappingPaths { .. }));
}

#[test]
fn test_restore_rejects_names_outside_backup_root() {
    let (_tmp, root) = setup_test_env();
    let server = root.join("htdocs");
    let backups = root.join("backups");
    create_test_project(&root.join("project"));
    populate_old_server(&server);
    std::fs::create_dir_all(&backups).unwrap();
    let before = snapshot(&server);

    for name in ["../project", root.join("project").as_str(), "backup_x/../../project"] {
        let err = backup::restore_backup(&backups, name, &server).unwrap_err();
        assert!(matches!(err, AppError::DirectoryNotFound(_)), "accepted {name}");
    }
    assert_eq!(snapshot(&server), before);
}
