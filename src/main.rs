use nfs_hostset::output::{render_comparison, render_host_set};
use nfs_hostset::{get_normalized_hosts, sets_semantically_equal};
use std::error::Error;

const USAGE: &str = "\
nfs-hostset - canonicalize and compare NFS export host access lists

USAGE:
    nfs-hostset <hosts.json>             normalize one host list and print it
    nfs-hostset <a.json> <b.json>        compare two host lists semantically

OPTIONS:
    -h, --help    Print help information

Host list files are JSON: {\"data\": [\"10.0.0.0/8\", \"myhost\", ...], \"count\": 2}
Exit code is 1 when two compared lists are not semantically equal.
";

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print!("{USAGE}");
        return Ok(());
    }

    match args.as_slice() {
        [file] => {
            let set = get_normalized_hosts(file)?;
            print!("{}", render_host_set(&set));
        }
        [a_file, b_file] => {
            let a = get_normalized_hosts(a_file)?;
            let b = get_normalized_hosts(b_file)?;
            let equal = sets_semantically_equal(&a, &b)?;
            print!("{}", render_comparison(&a, &b));
            if !equal {
                std::process::exit(1);
            }
        }
        _ => {
            eprint!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
