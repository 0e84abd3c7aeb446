// Discovery tests against synthetic library trees

#[cfg(test)]
mod tests {
    use crate::discovery::{
        DiscoveryError, LibraryRoot, discover_games_in, discover_installed_apps,
        discover_installed_games, find_game_path, library_roots,
    };
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_manifest(library: &Path, app_id: u32, install_dir: Option<&str>, name: &str) {
        let steamapps = library.join("steamapps");
        fs::create_dir_all(&steamapps).unwrap();

        let installdir_line = install_dir
            .map(|dir| format!("\t\"installdir\"\t\t\"{}\"\n", dir))
            .unwrap_or_default();
        let contents = format!(
            "\"AppState\"\n{{\n\t\"appid\"\t\t\"{}\"\n\t\"Universe\"\t\t\"1\"\n\t\"name\"\t\t\"{}\"\n{}\t\"StateFlags\"\t\t\"4\"\n}}\n",
            app_id, name, installdir_line
        );
        fs::write(steamapps.join(format!("appmanifest_{}.acf", app_id)), contents).unwrap();
    }

    fn install_dir(library: &Path, dir: &str) -> PathBuf {
        let path = library.join("steamapps/common").join(dir);
        fs::create_dir_all(&path).unwrap();
        path
    }

    fn write_registry(root: &Path, libraries: &[&Path]) {
        let steamapps = root.join("steamapps");
        fs::create_dir_all(&steamapps).unwrap();

        let mut contents = String::from("\"libraryfolders\"\n{\n");
        for (i, library) in libraries.iter().enumerate() {
            let escaped = library.display().to_string().replace('\\', "\\\\");
            contents.push_str(&format!(
                "\t\"{}\"\n\t{{\n\t\t\"path\"\t\t\"{}\"\n\t\t\"label\"\t\t\"\"\n\t\t\"apps\"\n\t\t{{\n\t\t}}\n\t}}\n",
                i, escaped
            ));
        }
        contents.push_str("}\n");
        fs::write(steamapps.join("libraryfolders.vdf"), contents).unwrap();
    }

    fn ids(values: &[u32]) -> BTreeSet<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_manifest_with_existing_installdir_is_installed() {
        let root = TempDir::new().unwrap();
        write_manifest(root.path(), 440, Some("TF2"), "Team Fortress 2");
        install_dir(root.path(), "TF2");

        let installed = discover_installed_apps(Some(root.path())).unwrap();
        assert_eq!(installed, ids(&[440]));
    }

    #[test]
    fn test_manifest_with_missing_installdir_folder_is_stale() {
        let root = TempDir::new().unwrap();
        write_manifest(root.path(), 441, Some("Ghost"), "Ghost Game");
        // common exists, but not Ghost
        install_dir(root.path(), "Other");

        let installed = discover_installed_apps(Some(root.path())).unwrap();
        assert!(!installed.contains(&441));
    }

    #[test]
    fn test_installdir_that_is_a_file_is_stale() {
        let root = TempDir::new().unwrap();
        write_manifest(root.path(), 441, Some("Ghost"), "Ghost Game");
        fs::create_dir_all(root.path().join("steamapps/common")).unwrap();
        fs::write(root.path().join("steamapps/common/Ghost"), "").unwrap();

        let installed = discover_installed_apps(Some(root.path())).unwrap();
        assert!(installed.is_empty());
    }

    #[test]
    fn test_blank_installdir_goes_through_disk_check() {
        let root = TempDir::new().unwrap();
        write_manifest(root.path(), 500, Some("   "), "Blank Dir");
        fs::create_dir_all(root.path().join("steamapps/common")).unwrap();

        let installed = discover_installed_apps(Some(root.path())).unwrap();
        assert!(!installed.contains(&500));
    }

    #[test]
    fn test_manifest_without_installdir_is_accepted() {
        let root = TempDir::new().unwrap();
        write_manifest(root.path(), 442, None, "Dedicated Server");

        let installed = discover_installed_apps(Some(root.path())).unwrap();
        assert_eq!(installed, ids(&[442]));
    }

    #[test]
    fn test_acceptance_from_any_library_wins() {
        let root = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();

        // Stale copy in the base library, real install on the second drive
        write_manifest(root.path(), 440, Some("TF2"), "Team Fortress 2");
        write_manifest(second.path(), 440, Some("TF2"), "Team Fortress 2");
        let real = install_dir(second.path(), "TF2");
        write_registry(root.path(), &[root.path(), second.path()]);

        let installed = discover_installed_apps(Some(root.path())).unwrap();
        assert_eq!(installed, ids(&[440]));

        let games = discover_installed_games(Some(root.path())).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].install_path.as_deref(), Some(real.as_path()));
        assert_eq!(games[0].library, second.path());
    }

    #[test]
    fn test_registry_libraries_are_scanned() {
        let root = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let missing_drive = root.path().join("unmounted");

        write_manifest(root.path(), 10, Some("Counter-Strike"), "Counter-Strike");
        install_dir(root.path(), "Counter-Strike");
        write_manifest(second.path(), 570, Some("dota 2 beta"), "Dota 2");
        install_dir(second.path(), "dota 2 beta");
        write_registry(
            root.path(),
            &[root.path(), missing_drive.as_path(), second.path()],
        );

        let installed = discover_installed_apps(Some(root.path())).unwrap();
        assert_eq!(installed, ids(&[10, 570]));
    }

    #[test]
    fn test_library_roots_dedup_base() {
        let root = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_registry(root.path(), &[root.path(), second.path(), second.path()]);

        let roots = library_roots(root.path());
        assert_eq!(
            roots,
            vec![LibraryRoot::new(root.path()), LibraryRoot::new(second.path())]
        );
    }

    #[test]
    fn test_nonexistent_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("no-steam-here");

        let installed = discover_installed_apps(Some(&root)).unwrap();
        assert!(installed.is_empty());
    }

    #[test]
    fn test_root_without_steamapps_is_empty() {
        let root = TempDir::new().unwrap();
        let installed = discover_installed_apps(Some(root.path())).unwrap();
        assert!(installed.is_empty());
    }

    #[test]
    fn test_root_that_is_a_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("steam");
        fs::write(&root, "").unwrap();

        let err = discover_installed_apps(Some(&root)).unwrap_err();
        assert!(matches!(err, DiscoveryError::RootNotDirectory(path) if path == root));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_root_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let root = dir.path().join("steam");
        fs::create_dir(&root).unwrap();
        fs::set_permissions(&root, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users bypass permission bits
        if fs::read_dir(&root).is_ok() {
            fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = discover_installed_apps(Some(&root));
        fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(matches!(
            result,
            Err(DiscoveryError::RootInaccessible { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_looping_extra_library_is_skipped() {
        let root = TempDir::new().unwrap();
        let broken = TempDir::new().unwrap();
        write_manifest(root.path(), 440, Some("TF2"), "Team Fortress 2");
        install_dir(root.path(), "TF2");

        // steamapps pointing at itself cannot be listed, even by root
        let looping = broken.path().join("steamapps");
        std::os::unix::fs::symlink(&looping, &looping).unwrap();
        write_registry(root.path(), &[root.path(), broken.path()]);

        let installed = discover_installed_apps(Some(root.path())).unwrap();
        assert_eq!(installed, ids(&[440]));
    }

    #[cfg(unix)]
    #[test]
    fn test_looping_base_steamapps_is_an_error() {
        let root = TempDir::new().unwrap();
        let looping = root.path().join("steamapps");
        std::os::unix::fs::symlink(&looping, &looping).unwrap();

        let err = discover_installed_apps(Some(root.path())).unwrap_err();
        assert!(matches!(
            err,
            DiscoveryError::RootInaccessible { path, .. } if path == looping
        ));
    }

    #[test]
    fn test_discovery_is_idempotent() {
        let root = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_manifest(root.path(), 440, Some("TF2"), "Team Fortress 2");
        install_dir(root.path(), "TF2");
        write_manifest(root.path(), 441, Some("Ghost"), "Ghost Game");
        write_manifest(second.path(), 442, None, "Tool");
        write_registry(root.path(), &[root.path(), second.path()]);

        let first = discover_installed_apps(Some(root.path())).unwrap();
        let again = discover_installed_apps(Some(root.path())).unwrap();
        assert_eq!(first, again);
        assert_eq!(first, ids(&[440, 442]));
    }

    #[test]
    fn test_installed_games_carry_details() {
        let root = TempDir::new().unwrap();
        write_manifest(root.path(), 730, Some("Counter-Strike Global Offensive"), "Counter-Strike 2");
        let cs = install_dir(root.path(), "Counter-Strike Global Offensive");
        write_manifest(root.path(), 442, None, "Tool");

        let games = discover_installed_games(Some(root.path())).unwrap();
        assert_eq!(games.len(), 2);

        assert_eq!(games[0].app_id, 442);
        assert_eq!(games[0].name.as_deref(), Some("Tool"));
        assert_eq!(games[0].install_path, None);

        assert_eq!(games[1].app_id, 730);
        assert_eq!(games[1].name.as_deref(), Some("Counter-Strike 2"));
        assert_eq!(games[1].install_path.as_deref(), Some(cs.as_path()));
        assert_eq!(games[1].library, root.path());
    }

    #[test]
    fn test_extra_libraries_are_scanned() {
        let root = TempDir::new().unwrap();
        let extra = TempDir::new().unwrap();
        write_manifest(extra.path(), 620, Some("Portal 2"), "Portal 2");
        install_dir(extra.path(), "Portal 2");

        let games = discover_games_in(root.path(), &[extra.path().to_path_buf()]).unwrap();
        let found: Vec<u32> = games.iter().map(|g| g.app_id).collect();
        assert_eq!(found, vec![620]);

        // Extras still count when the base root is gone
        let gone = root.path().join("missing");
        let games = discover_games_in(&gone, &[extra.path().to_path_buf()]).unwrap();
        assert_eq!(games.len(), 1);
    }

    #[test]
    fn test_find_game_path() {
        let root = TempDir::new().unwrap();
        write_manifest(root.path(), 440, Some("TF2"), "Team Fortress 2");
        let tf2 = install_dir(root.path(), "TF2");
        write_manifest(root.path(), 442, None, "Tool");

        assert_eq!(find_game_path(440, Some(root.path())).unwrap(), Some(tf2));
        assert_eq!(find_game_path(442, Some(root.path())).unwrap(), None);
        assert_eq!(find_game_path(999, Some(root.path())).unwrap(), None);
    }
}
