use std::{fs, path::Path};

use safecalc::{ErrorKind, Number, evaluate};
use walkdir::WalkDir;

/// Runs every `expression => expected` line of the `.calc` files under
/// `tests/cases`.
///
/// `expected` is either a number, written the way it is displayed, or
/// `error <Kind>`. Blank lines and lines starting with `#` are ignored.
#[test]
fn case_files_hold() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/cases");
    let mut count = 0;

    for entry in WalkDir::new(&root).into_iter()
                                    .filter_map(Result::ok)
                                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;

            let Some((source, expected)) = line.rsplit_once("=>") else {
                panic!("{path:?}:{}: missing '=>' in {line:?}", line_no + 1);
            };
            check_case(source.trim(), expected.trim())
                .unwrap_or_else(|msg| panic!("{path:?}:{}: {msg}", line_no + 1));
        }
    }

    assert!(count > 0, "No cases found in {root:?}");
}

fn check_case(source: &str, expected: &str) -> Result<(), String> {
    let result = evaluate(source);

    if let Some(name) = expected.strip_prefix("error ") {
        let kind = kind_named(name.trim()).ok_or_else(|| format!("unknown error kind {name:?}"))?;
        return match result {
            Err(e) if e.kind() == kind => Ok(()),
            Err(e) => Err(format!("{source:?} failed with {:?} ({e}), expected {kind:?}",
                                  e.kind())),
            Ok(value) => Err(format!("{source:?} = {value}, expected {kind:?}")),
        };
    }

    let want: Number = expected.parse()
                               .map_err(|e| format!("bad expectation {expected:?}: {e}"))?;
    let value = result.map_err(|e| format!("{source:?} failed: {e}"))?;

    let same_kind = value.is_integer() == want.is_integer();
    if same_kind && value.approx_eq(want) {
        Ok(())
    } else {
        Err(format!("{source:?} = {value}, expected {want}"))
    }
}

fn kind_named(name: &str) -> Option<ErrorKind> {
    let kind = match name {
        "Syntax" => ErrorKind::Syntax,
        "DisallowedConstruct" => ErrorKind::DisallowedConstruct,
        "DivisionByZero" => ErrorKind::DivisionByZero,
        "ArithmeticOverflow" => ErrorKind::ArithmeticOverflow,
        "Domain" => ErrorKind::Domain,
        "ResourceLimit" => ErrorKind::ResourceLimit,
        _ => return None,
    };
    Some(kind)
}
