//! `writer <writefile> <writestr>`: create or overwrite `writefile` with
//! `writestr`, logging errors and a debug trace of the write.

use writer::logging::LogChannel;

fn main() {
    let channel = LogChannel::open("writer");
    let code = writer::run::run(std::env::args_os(), &channel);
    drop(channel);
    std::process::exit(code);
}
