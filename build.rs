use std::env;
use std::fs;
use std::path::Path;

// Claves de .env que se exponen al crate via option_env!
const FORWARDED_KEYS: &[&str] = &[
    "BACKEND_URL",
    "ENABLE_LOGGING",
    "APP_ROOT_ID",
    "MAP_MOUNT_ID",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "TILE_URL_TEMPLATE",
    "TILE_ATTRIBUTION",
    "MARKER_ICON_URL",
    "MARKER_ICON_RETINA_URL",
    "MARKER_SHADOW_URL",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        // Sin .env: se usan los valores por defecto de AppConfig
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=No se pudo leer .env: {}", e);
            return;
        }
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if !FORWARDED_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env ignorada: {}", key);
            continue;
        }
        // La variable de entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            let value = value.trim().trim_matches('"');
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
