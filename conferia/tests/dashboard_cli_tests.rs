use std::fs;
use std::path::PathBuf;
use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Abstraction for managing a conferia test project: local CSV fixtures
/// plus a conferia.yaml pointing the source sets at them.
struct ConferiaTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl ConferiaTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();
        fs::create_dir_all(root.join("data"))?;

        let env = Self { _tmp: tmp, root };
        env.write_default_fixtures()?;
        Ok(env)
    }

    fn write(&self, rel: &str, content: &str) -> Result<()> {
        fs::write(self.root.join(rel), content)?;
        Ok(())
    }

    fn write_default_fixtures(&self) -> Result<()> {
        // One duplicated sampled document: 4 rows, 3 distinct
        self.write(
            "data/base.csv",
            "Filial,Numero,Serie\n\
             F01,1001,1\n\
             F01,1001,1\n\
             F02,2002,1\n\
             F03,3003,2\n",
        )?;

        self.write(
            "data/rules.csv",
            "Cenario\nc1\nc2\nc3\nc4\nc5\n",
        )?;

        // checked = 100, success = 88, error = 12
        self.write(
            "data/summary.csv",
            "Regra,Notas Conferidas,Sucesso,Erro\n\
             Regra: 01 - Preco,40,30,10\n\
             Regra: 02 - Imposto,40,38,2\n\
             Regra: 03 - Frete,20,20,0\n",
        )?;

        // Fiscal positional layout: key = {0,3,4}, category = 1, rule = 10
        self.write(
            "data/divergencias.csv",
            "Filial,Estado,CNPJ,Numero,Serie,Campo,Esperado,Encontrado,Data,Conferente,Regra Aplicada\n\
             F01,SP,111,1001,1,preco,10,12,2026-01-05,ana,Regra: 01 - Preco - item 2\n\
             F01,SP,111,1001,1,imposto,5,6,2026-01-05,ana,Regra: 01 - Preco - item 3\n\
             F02,RJ,222,2002,1,frete,8,9,2026-01-06,bea,Regra: 03 - Frete - total\n",
        )?;

        // XML variant fixtures: key = {0,1}, category = 1, rule text = 2
        self.write(
            "data/summary_xml.csv",
            "Regra XML,Itens Conferidos,Sucesso,Erro\n\
             X1,50,40,10\n",
        )?;
        self.write(
            "data/rules_xml.csv",
            "Regra XML\nx1\nx2\n",
        )?;
        self.write(
            "data/divergencias_xml.csv",
            "Chave,Produto,Campo,Valor XML,Valor Planilha,Obs\n\
             K1,ProdA,icms - aliquota - item,1,2,x\n\
             K1,ProdA,ipi - base - item,3,4,y\n\
             K2,ProdB,icms - aliquota - outro,5,6,z\n",
        )?;

        self.write(
            "conferia.yaml",
            "request-timeout-secs: 5\n\
             fiscal:\n\
             \x20 base: data/base.csv\n\
             \x20 rules: data/rules.csv\n\
             \x20 divergences: data/divergencias.csv\n\
             \x20 summary: data/summary.csv\n\
             xml:\n\
             \x20 base: data/base.csv\n\
             \x20 rules: data/rules_xml.csv\n\
             \x20 divergences: data/divergencias_xml.csv\n\
             \x20 summary: data/summary_xml.csv\n",
        )?;
        Ok(())
    }

    fn conferia(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("conferia"));
        cmd.current_dir(&self.root);
        cmd
    }
}

#[test]
fn test_render_fiscal_dashboard() -> Result<()> {
    let env = ConferiaTestEnv::new()?;

    env.conferia()
        .args(["render", "--variant", "fiscal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule Coverage"))
        .stdout(predicate::str::contains("88.00%"))
        .stdout(predicate::str::contains("12.00%"))
        .stdout(predicate::str::contains("Documents with divergence"))
        .stdout(predicate::str::contains("01 - Preco"))
        .stdout(predicate::str::contains("03 - Frete"));

    Ok(())
}

#[test]
fn test_render_json_report() -> Result<()> {
    let env = ConferiaTestEnv::new()?;

    env.conferia()
        .args(["render", "--variant", "fiscal", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"records_checked\": 100"))
        .stdout(predicate::str::contains("\"rules_evaluated\": 5"))
        .stdout(predicate::str::contains("\"documents_with_divergence\": 2"))
        .stdout(predicate::str::contains("\"sample_size\": 3"));

    Ok(())
}

#[test]
fn test_render_xml_variant() -> Result<()> {
    let env = ConferiaTestEnv::new()?;

    env.conferia()
        .args(["render", "--variant", "xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("80.00%"))
        .stdout(predicate::str::contains("icms - aliquota"))
        .stdout(predicate::str::contains("ProdA"));

    Ok(())
}

#[test]
fn test_missing_essential_table_blocks_the_render() -> Result<()> {
    let env = ConferiaTestEnv::new()?;
    // Point the summary at a file that does not exist: the loader
    // collapses the failure to absence and the essentials gate trips.
    env.write(
        "conferia.yaml",
        "fiscal:\n\
         \x20 base: data/base.csv\n\
         \x20 rules: data/rules.csv\n\
         \x20 divergences: data/divergencias.csv\n\
         \x20 summary: data/missing.csv\n",
    )?;

    env.conferia()
        .args(["render", "--variant", "fiscal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Essential data missing: summary"));

    Ok(())
}

#[test]
fn test_empty_divergences_is_a_success_state() -> Result<()> {
    let env = ConferiaTestEnv::new()?;
    // Header-only export: treated as "no divergences", not an error
    env.write("data/divergencias.csv", "Filial,Estado,CNPJ,Numero,Serie\n")?;

    env.conferia()
        .args(["render", "--variant", "fiscal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No divergences found"));

    Ok(())
}

#[test]
fn test_inspect_summary_table() -> Result<()> {
    let env = ConferiaTestEnv::new()?;

    env.conferia()
        .args(["inspect", "--table", "summary", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notas Conferidas"))
        .stdout(predicate::str::contains("➜"))
        .stdout(predicate::str::contains("(3 rows total)"));

    Ok(())
}

#[test]
fn test_sources_lists_the_resolved_set() -> Result<()> {
    let env = ConferiaTestEnv::new()?;

    env.conferia()
        .args(["sources", "--variant", "xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data/divergencias_xml.csv"))
        .stdout(predicate::str::contains("request timeout: 5s"));

    Ok(())
}

#[test]
fn test_unknown_variant_fails_cleanly() -> Result<()> {
    let env = ConferiaTestEnv::new()?;

    env.conferia()
        .args(["render", "--variant", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dashboard variant"));

    Ok(())
}
