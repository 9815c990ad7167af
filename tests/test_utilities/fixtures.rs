use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

pub const POM_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
	<modelVersion>4.0.0</modelVersion>

	<groupId>com.example</groupId>
	<artifactId>demo</artifactId>
	<version>1.0.0-SNAPSHOT</version>

	<dependencies>
		<dependency>
			<groupId>org.springframework.boot</groupId>
			<artifactId>spring-boot-starter</artifactId>
		</dependency>
	</dependencies>
</project>
"#;

pub const APPLICATION_CLASS_PATH: &str = "src/main/java/com/example/demo/DemoApplication.java";

pub const APPLICATION_CLASS: &str = "package com.example.demo;

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class DemoApplication {

	public static void main(String[] args) {
		SpringApplication.run(DemoApplication.class, args);
	}
}
";

pub const PROPERTIES_PATH: &str = "src/main/resources/application.properties";

/// Builds a zip archive from `(name, content)` pairs; names ending in `/`
/// become directory entries
pub fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// The skeleton a Maven project request returns
pub fn generated_project_zip() -> Vec<u8> {
    build_zip(&[
        ("pom.xml", POM_XML),
        (APPLICATION_CLASS_PATH, APPLICATION_CLASS),
        (PROPERTIES_PATH, "spring.application.name=demo\n"),
    ])
}
