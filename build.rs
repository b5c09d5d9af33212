use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines().map(str::trim) {
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, comillas opcionales
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Las variables del entorno real tienen prioridad
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No se encontró .env. Usando valores por defecto (copiar .env.example a .env para configurar el backend).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in [
        "BACKEND_URL",
        "BACKEND_URL_DEVELOPMENT",
        "BACKEND_URL_PRODUCTION",
        "ENVIRONMENT",
        "ENABLE_LOGGING",
        "DEFAULT_LANGUAGE",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
