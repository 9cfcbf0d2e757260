use crate::commands::{CmdMessage, CmdResult, GalleriaPaths};
use crate::config::GalleriaConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &GalleriaPaths, global: bool, action: ConfigAction) -> Result<CmdResult> {
    let read_dir = if global {
        paths.config_dir(true)?
    } else {
        paths.active_config_dir()
    };

    match action {
        ConfigAction::ShowAll => {
            let config = GalleriaConfig::load(&read_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = GalleriaConfig::load(&read_dir)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(config.get(&key)?));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let dir = paths.config_dir(global)?;
            let mut config = GalleriaConfig::load(&dir)?;
            config.set(&key, &value)?;
            config.save(&dir)?;

            let display_val = config.get(&key)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleriaError;

    fn paths(root: &std::path::Path) -> GalleriaPaths {
        GalleriaPaths {
            project: root.join(".galleria"),
            global: Some(root.join("global")),
        }
    }

    #[test]
    fn set_then_show_key() {
        let temp = tempfile::tempdir().unwrap();
        let paths = paths(temp.path());

        let result = run(
            &paths,
            false,
            ConfigAction::Set("noun".into(), "prints".into()),
        )
        .unwrap();
        assert_eq!(result.config.unwrap().noun, "prints");

        let result = run(&paths, false, ConfigAction::ShowKey("noun".into())).unwrap();
        assert_eq!(result.messages[0].content, "prints");
    }

    #[test]
    fn reads_global_when_project_dir_is_absent() {
        let temp = tempfile::tempdir().unwrap();
        let paths = paths(temp.path());

        run(
            &paths,
            true,
            ConfigAction::Set("debounce-ms".into(), "120".into()),
        )
        .unwrap();
        let result = run(&paths, false, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().debounce_ms, 120);
    }

    #[test]
    fn global_flag_reads_global_scope_even_with_project_dir() {
        let temp = tempfile::tempdir().unwrap();
        let paths = paths(temp.path());

        run(&paths, false, ConfigAction::Set("noun".into(), "local".into())).unwrap();
        run(&paths, true, ConfigAction::Set("noun".into(), "global".into())).unwrap();

        let result = run(&paths, true, ConfigAction::ShowKey("noun".into())).unwrap();
        assert_eq!(result.messages[0].content, "global");

        let result = run(&paths, false, ConfigAction::ShowKey("noun".into())).unwrap();
        assert_eq!(result.messages[0].content, "local");

        let result = run(&paths, true, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().noun, "global");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let err = run(
            &paths(temp.path()),
            false,
            ConfigAction::ShowKey("colour".into()),
        )
        .unwrap_err();
        assert!(matches!(err, GalleriaError::Config(_)));
    }
}
