use oru_test_utils::{orutest, str};

// tests HTML output with escaped text
orutest!(highlight_html, |_prj, cmd| {
    cmd.args(["highlight", "--html"])
        .stdin("const a = 'x' // done\n\nif (a < b) {}\n")
        .assert_success()
        .stdout_eq(str![[r#"
<span class="code-keyword">const</span> a = <span class="code-string">'x'</span> <span class="code-comment">// done</span>
&nbsp;
<span class="code-keyword">if</span> (a &lt; b) {}

"#]]);
});

// tests plain terminal output from a file with line numbers
orutest!(highlight_file_with_line_numbers, |prj, cmd| {
    prj.create_file("snippet.js", "import { ethers } from 'ethers'\nawait run()\n");
    cmd.args(["highlight", "snippet.js", "-n"]).assert_success().stdout_eq(str![[r#"
1 │ import { ethers } from 'ethers'
2 │ await run()

"#]]);
});
