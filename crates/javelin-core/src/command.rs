//! Launch-command construction.
//!
//! Single-pass, side-effect-free assembly of the final argument
//! vector: classpath first, then the JVM segment, main class, and
//! program segment. Versions without templated arguments fall back to
//! the legacy fixed JVM flags plus the expanded legacy string.

use crate::expand::ArgumentExpander;
use crate::paths;
use crate::vars::VariableTable;
use javelin_schema::{Platform, VersionMetadata};
use std::path::{Path, PathBuf};

/// The fully constructed launch command and its byproducts.
///
/// `argv` is ready to hand to a process-launch collaborator (it does
/// not include the Java executable itself). `skipped` lists library
/// names whose coordinate failed to parse; they are excluded from the
/// classpath rather than failing the build, and callers decide whether
/// to report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Ordered process arguments.
    pub argv: Vec<String>,
    /// The computed classpath string, also injected as `${classpath}`.
    pub classpath: String,
    /// Natives directory, also injected as `${natives_directory}`.
    pub natives_dir: PathBuf,
    /// Library names excluded because their coordinate would not parse.
    pub skipped: Vec<String>,
}

/// Build the classpath for a version: the client jar first, then every
/// library that passes its rules on `platform` and carries a primary
/// artifact, in metadata order.
fn build_classpath(
    meta: &VersionMetadata,
    base_dir: &Path,
    platform: Platform,
) -> (String, Vec<String>) {
    let mut entries = vec![paths::version_jar(base_dir, &meta.id).display().to_string()];
    let mut skipped = Vec::new();

    for lib in &meta.libraries {
        if !lib.applies_to(platform) {
            continue;
        }
        if lib.downloads.artifact.is_none() {
            continue;
        }
        match lib.coordinate() {
            Ok(coordinate) => {
                entries.push(
                    paths::library_path(base_dir, &coordinate)
                        .display()
                        .to_string(),
                );
            }
            Err(_) => skipped.push(lib.name.clone()),
        }
    }

    (entries.join(platform.classpath_separator()), skipped)
}

/// Build the launch command for a version rooted at `base_dir`.
///
/// Injects `classpath` and `natives_directory` into `vars`, then
/// assembles either the templated argument vector
/// (`-Xmx.. jvm-args main-class game-args`) or, for versions without
/// templated game arguments, the legacy vector
/// (`-Xmx.. -Djava.library.path=.. -cp <classpath> main-class legacy-args`).
///
/// Pure: identical inputs produce an identical plan.
pub fn build_launch_command(
    meta: &VersionMetadata,
    base_dir: &Path,
    mut vars: VariableTable,
    memory_mb: u32,
    platform: Platform,
) -> LaunchPlan {
    let (classpath, skipped) = build_classpath(meta, base_dir, platform);
    let natives_dir = paths::natives_dir(base_dir, &meta.id);

    vars.insert("classpath", classpath.clone());
    vars.insert("natives_directory", natives_dir.display().to_string());

    let expander = ArgumentExpander::new();
    let memory_flag = format!("-Xmx{memory_mb}m");

    let argv = if meta.uses_legacy_arguments() {
        let mut argv = vec![
            memory_flag,
            format!("-Djava.library.path={}", natives_dir.display()),
            "-cp".to_string(),
            classpath.clone(),
            meta.main_class.clone(),
        ];
        argv.extend(expander.expand_legacy(&meta.legacy_arguments, &vars));
        argv
    } else {
        let mut argv = vec![memory_flag];
        argv.extend(expander.expand(&meta.arguments.jvm, &vars, platform));
        argv.push(meta.main_class.clone());
        argv.extend(expander.expand(&meta.arguments.game, &vars, platform));
        argv
    };

    LaunchPlan {
        argv,
        classpath,
        natives_dir,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templated_meta() -> VersionMetadata {
        serde_json::from_str(
            r#"{
                "id": "1.20.4",
                "mainClass": "net.minecraft.client.main.Main",
                "arguments": {
                    "jvm": [
                        {"rules": [{"action": "allow", "os": {"name": "linux"}}],
                         "value": ["-Dos.check=linux"]},
                        "-Djava.library.path=${natives_directory}",
                        "-cp", "${classpath}"
                    ],
                    "game": ["--username", "${auth_player_name}", "--width", "${resolution_width}"]
                },
                "libraries": [
                    {"name": "org.lwjgl:lwjgl:3.3.1",
                     "downloads": {"artifact": {"url": "https://example.com/lwjgl.jar", "sha1": "a"}}},
                    {"name": "org.lwjgl:lwjgl-glfw:3.3.1",
                     "downloads": {"artifact": {"url": "https://example.com/glfw.jar", "sha1": "b"}},
                     "rules": [{"action": "allow", "os": {"name": "windows"}}]},
                    {"name": "no.artifact:entry:1.0"},
                    {"name": "broken"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn classpath_filters_and_orders() {
        let base = Path::new("/data");
        let plan = build_launch_command(
            &templated_meta(),
            base,
            VariableTable::new(),
            2048,
            Platform::Linux,
        );

        // Client jar first, then the one library that passes rules and
        // has an artifact; the windows-only, artifact-less, and
        // unparsable entries are all excluded.
        assert_eq!(
            plan.classpath,
            "/data/versions/1.20.4/1.20.4.jar:/data/libraries/org/lwjgl/lwjgl/3.3.1/lwjgl-3.3.1.jar"
        );
        assert_eq!(plan.skipped, vec!["broken"]);
    }

    #[test]
    fn templated_argv_shape() {
        let base = Path::new("/data");
        let vars: VariableTable = [("auth_player_name", "Steve")].into_iter().collect();
        let plan = build_launch_command(&templated_meta(), base, vars, 2048, Platform::Linux);

        let argv = plan.argv;
        assert_eq!(argv[0], "-Xmx2048m");
        assert_eq!(argv[1], "-Dos.check=linux");
        assert_eq!(argv[2], "-Djava.library.path=/data/natives/1.20.4");
        assert_eq!(argv[3], "-cp");
        assert_eq!(argv[4], plan.classpath);
        assert_eq!(argv[5], "net.minecraft.client.main.Main");
        // Denylisted --width and its unresolved value are gone; the
        // substituted game arguments close the vector.
        assert_eq!(&argv[6..], &["--username", "Steve"]);
    }

    #[test]
    fn jvm_rule_gating_follows_platform() {
        let base = Path::new("/data");
        let plan = build_launch_command(
            &templated_meta(),
            base,
            VariableTable::new(),
            1024,
            Platform::Windows,
        );
        assert!(!plan.argv.contains(&"-Dos.check=linux".to_string()));
    }

    #[test]
    fn legacy_argv_shape() {
        let meta: VersionMetadata = serde_json::from_str(
            r#"{
                "id": "1.8.9",
                "mainClass": "net.minecraft.client.main.Main",
                "minecraftArguments": "--username ${auth_player_name} --uuid ${auth_uuid}"
            }"#,
        )
        .unwrap();

        let vars: VariableTable = [("auth_player_name", "Steve"), ("auth_uuid", "1234")]
            .into_iter()
            .collect();
        let plan = build_launch_command(&meta, Path::new("/data"), vars, 1024, Platform::Linux);

        assert_eq!(
            plan.argv,
            vec![
                "-Xmx1024m",
                "-Djava.library.path=/data/natives/1.8.9",
                "-cp",
                "/data/versions/1.8.9/1.8.9.jar",
                "net.minecraft.client.main.Main",
                "--username",
                "Steve",
                "--uuid",
                "1234",
            ]
        );
    }

    #[test]
    fn build_is_referentially_transparent() {
        let meta = templated_meta();
        let vars: VariableTable = [("auth_player_name", "Steve")].into_iter().collect();

        let first = build_launch_command(&meta, Path::new("/d"), vars.clone(), 512, Platform::Linux);
        let second =
            build_launch_command(&meta, Path::new("/d"), vars, 512, Platform::Linux);
        assert_eq!(first, second);
    }

    #[test]
    fn windows_classpath_uses_semicolon() {
        let plan = build_launch_command(
            &templated_meta(),
            Path::new("/data"),
            VariableTable::new(),
            512,
            Platform::Windows,
        );
        assert!(plan.classpath.contains(';'));
    }
}
